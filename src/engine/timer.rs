use std::time::Duration;

use crate::utils::app_time::AppInstant;

/// Identifies one simulated search. Newer searches always carry larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(u64);

#[derive(Debug, Clone)]
struct PendingSearch {
    ticket: SearchTicket,
    due: AppInstant,
}

/// One-shot timer where starting a new search supersedes the pending one.
/// At most one search is pending; tickets of superseded searches never fire.
#[derive(Debug, Clone, Default)]
pub struct SearchTimer {
    issued: u64,
    pending: Option<PendingSearch>,
}

impl SearchTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer, replacing whatever was pending.
    pub fn start(&mut self, now: AppInstant, delay: Duration) -> SearchTicket {
        self.issued += 1;
        let ticket = SearchTicket(self.issued);
        self.pending = Some(PendingSearch {
            ticket,
            due: now + delay,
        });
        ticket
    }

    pub fn pending_ticket(&self) -> Option<SearchTicket> {
        self.pending.as_ref().map(|p| p.ticket)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Disarms and returns true only if `ticket` is the live search.
    pub fn complete(&mut self, ticket: SearchTicket) -> bool {
        if self.pending_ticket() == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Ticket of the pending search if its deadline has passed.
    pub fn due(&self, now: AppInstant) -> Option<SearchTicket> {
        self.pending
            .as_ref()
            .filter(|p| now >= p.due)
            .map(|p| p.ticket)
    }

    /// Time left on the pending search. Zero once overdue.
    pub fn remaining(&self, now: AppInstant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.due.saturating_duration_since(now))
    }
}
