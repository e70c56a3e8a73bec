// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};

use crate::error::{Result, SmartSpendError};
use crate::models::{Transaction, TransactionDraft, decode_transactions};

/// Remote owner of the user's transactions.
pub trait TransactionStore {
    fn fetch_all(&self) -> Result<Vec<Transaction>>;
    fn create(&self, draft: &TransactionDraft) -> Result<Transaction>;
    fn update(&self, id: &str, draft: &TransactionDraft) -> Result<Transaction>;
    fn delete(&self, id: &str) -> Result<()>;
}

/// REST client for the transaction API. Every call carries the bearer token;
/// without one no request is made.
pub struct HttpTransactionStore {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpTransactionStore {
    pub fn new(client: Client, base_url: &str, token: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/transactions{}", self.base_url, path)
    }

    fn authed(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        let token = self.token.as_deref().ok_or(SmartSpendError::Unauthenticated)?;
        Ok(req.bearer_auth(token))
    }

    fn check(resp: Response, action: &'static str) -> Result<Response> {
        classify(resp.status(), action)?;
        Ok(resp)
    }
}

/// Maps a response status onto the store's errors. 401 and 403 read as a
/// lost session.
pub fn classify(status: StatusCode, action: &'static str) -> Result<()> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        tracing::warn!(action, %status, "transaction store refused credentials");
        return Err(SmartSpendError::Unauthenticated);
    }
    if !status.is_success() {
        tracing::warn!(action, %status, "transaction store request failed");
        return Err(SmartSpendError::Rejected {
            action,
            status: status.as_u16(),
        });
    }
    Ok(())
}

impl TransactionStore for HttpTransactionStore {
    fn fetch_all(&self) -> Result<Vec<Transaction>> {
        let req = self.authed(self.client.get(self.url("")))?;
        let resp = Self::check(req.send()?, "fetch")?;
        let txns = decode_transactions(resp.json::<Vec<serde_json::Value>>()?);
        tracing::debug!(count = txns.len(), "fetched transactions");
        Ok(txns)
    }

    fn create(&self, draft: &TransactionDraft) -> Result<Transaction> {
        draft.validate()?;
        let req = self.authed(self.client.post(self.url("/add")))?;
        let resp = Self::check(req.json(draft).send()?, "add")?;
        let created: Transaction = resp.json()?;
        tracing::info!(id = %created.id, "transaction added");
        Ok(created)
    }

    fn update(&self, id: &str, draft: &TransactionDraft) -> Result<Transaction> {
        draft.validate()?;
        let req = self.authed(self.client.put(self.url(&format!("/update/{}", id))))?;
        let resp = Self::check(req.json(draft).send()?, "update")?;
        let updated: Transaction = resp.json()?;
        tracing::info!(id = %updated.id, "transaction updated");
        Ok(updated)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let req = self.authed(self.client.delete(self.url(&format!("/delete/{}", id))))?;
        Self::check(req.send()?, "delete")?;
        tracing::info!(id, "transaction deleted");
        Ok(())
    }
}
