//! HR review queue
//!
//! Lists submitted requests and records approve/deny decisions. Decisions
//! change the request's status; the request stays in the queue so the full
//! history can still be listed.

use crate::error::{ReimburseError, ReimburseResult};
use crate::models::{Request, RequestId};
use crate::notification::Notification;

/// Requests awaiting or having received an HR decision
#[derive(Debug, Clone, Default)]
pub struct ReviewQueue {
    requests: Vec<Request>,
}

impl ReviewQueue {
    /// Create a queue over the given requests, oldest first
    pub fn new(mut requests: Vec<Request>) -> Self {
        requests.sort_by_key(|r| r.created_at);
        Self { requests }
    }

    /// Requests still waiting for a decision, in creation order
    pub fn pending(&self) -> Vec<&Request> {
        self.requests.iter().filter(|r| r.is_pending()).collect()
    }

    /// Every request, in creation order
    pub fn all(&self) -> &[Request] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Get a request by ID
    pub fn get(&self, id: RequestId) -> Option<&Request> {
        self.requests.iter().find(|r| r.id == id)
    }

    /// Find a request by full UUID or short display prefix
    ///
    /// Ambiguous prefixes are a validation error.
    pub fn find(&self, identifier: &str) -> ReimburseResult<&Request> {
        let mut matches = self.requests.iter().filter(|r| r.id.matches(identifier));
        let found = matches
            .next()
            .ok_or_else(|| ReimburseError::request_not_found(identifier))?;
        if matches.next().is_some() {
            return Err(ReimburseError::Validation(format!(
                "'{}' matches more than one request",
                identifier
            )));
        }
        Ok(found)
    }

    /// Add a submitted request, or replace the one it updates
    ///
    /// A replaced request keeps its original creation time. A request that
    /// has already been decided cannot be replaced.
    pub fn submit(&mut self, mut request: Request) -> ReimburseResult<()> {
        match self.requests.iter_mut().find(|r| r.id == request.id) {
            Some(existing) => {
                if !existing.is_pending() {
                    return Err(ReimburseError::InvalidTransition {
                        action: "resubmit",
                        status: existing.status.as_str().to_string(),
                    });
                }
                request.created_at = existing.created_at;
                log::info!("Updated request {}", request.id);
                *existing = request;
            }
            None => {
                log::info!("Queued request {}", request.id);
                self.requests.push(request);
            }
        }
        Ok(())
    }

    /// Approve a pending request
    pub fn approve(&mut self, id: RequestId) -> ReimburseResult<Notification> {
        self.get_mut(id)?.approve()?;
        log::info!("Approved request {}", id);
        Ok(Notification::success(
            "Request Approved",
            "The reimbursement request has been approved.",
        ))
    }

    /// Deny a pending request
    pub fn deny(&mut self, id: RequestId) -> ReimburseResult<Notification> {
        self.get_mut(id)?.deny()?;
        log::info!("Denied request {}", id);
        Ok(Notification::info(
            "Request Denied",
            "The reimbursement request has been denied.",
        ))
    }

    /// Hand back the requests, e.g. for export
    pub fn into_requests(self) -> Vec<Request> {
        self.requests
    }

    fn get_mut(&mut self, id: RequestId) -> ReimburseResult<&mut Request> {
        self.requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ReimburseError::request_not_found(id.to_string()))
    }
}
