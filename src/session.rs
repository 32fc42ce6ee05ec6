//! Holds the save currently in view.
//!
//! Loads are started and finished separately because reading the file is
//! the one step that may complete out of order. Only the most recently
//! started load is allowed to replace the state.

use log::debug;

use crate::error::DecodeError;
use crate::model::{ActFilter, Catalog, CatalogReport, SaveState};
use crate::processor;

/// Issued by [`Session::begin_load`]; identifies one load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer load was started in the meantime; the result was dropped.
    Stale,
}

#[derive(Debug, Default)]
pub struct Session {
    latest: u64,
    current: Option<SaveState>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest += 1;
        LoadTicket(self.latest)
    }

    /// Finish the load identified by `ticket`.
    ///
    /// A stale result is discarded whether it succeeded or not. For the
    /// latest load a success replaces the current save and a failure clears
    /// it, so results from a previous file are never shown next to an error.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<SaveState, DecodeError>,
    ) -> Result<LoadOutcome, DecodeError> {
        if ticket.0 != self.latest {
            debug!("dropping load #{} (latest is #{})", ticket.0, self.latest);
            return Ok(LoadOutcome::Stale);
        }
        match result {
            Ok(save) => {
                self.current = Some(save);
                Ok(LoadOutcome::Applied)
            }
            Err(e) => {
                self.current = None;
                Err(e)
            }
        }
    }

    /// Decode `raw` under `ticket`.
    pub fn load_bytes(&mut self, ticket: LoadTicket, raw: &[u8]) -> Result<LoadOutcome, DecodeError> {
        self.complete_load(ticket, crate::parser::decode(raw))
    }

    pub fn save_state(&self) -> Option<&SaveState> {
        self.current.as_ref()
    }

    pub fn evaluate(&self, catalog: &Catalog, act_filter: ActFilter) -> Option<CatalogReport> {
        self.current
            .as_ref()
            .map(|save| processor::evaluate_catalog(catalog, save, act_filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tests::seal;
    use serde_json::json;

    fn save(marker: u32) -> SaveState {
        SaveState::from_value(json!({ "playerData": { "marker": marker } }))
    }

    fn marker(session: &Session) -> Option<u64> {
        session.save_state()?.player_field("marker")?.as_u64()
    }

    #[test]
    fn latest_load_wins() {
        let mut session = Session::new();
        let first = session.begin_load();
        let second = session.begin_load();

        assert_eq!(session.complete_load(second, Ok(save(2))).unwrap(), LoadOutcome::Applied);
        assert_eq!(session.complete_load(first, Ok(save(1))).unwrap(), LoadOutcome::Stale);
        assert_eq!(marker(&session), Some(2));
    }

    #[test]
    fn stale_failure_is_ignored() {
        let mut session = Session::new();
        let first = session.begin_load();
        let second = session.begin_load();
        session.complete_load(second, Ok(save(2))).unwrap();

        let outcome = session.complete_load(first, Err(DecodeError::Padding));
        assert_eq!(outcome.unwrap(), LoadOutcome::Stale);
        assert_eq!(marker(&session), Some(2));
    }

    #[test]
    fn failed_reload_clears_previous_save() {
        let mut session = Session::new();
        let first = session.begin_load();
        session.complete_load(first, Ok(save(1))).unwrap();

        let second = session.begin_load();
        assert!(session.load_bytes(second, b"short").is_err());
        assert!(session.save_state().is_none());
        assert!(session.evaluate(&Catalog { version: 1, categories: vec![] }, ActFilter::All).is_none());
    }

    #[test]
    fn load_bytes_decodes() {
        let mut session = Session::new();
        let ticket = session.begin_load();
        let raw = seal(br#"{"playerData":{"marker":7}}"#);
        assert_eq!(session.load_bytes(ticket, &raw).unwrap(), LoadOutcome::Applied);
        assert_eq!(marker(&session), Some(7));
    }
}
