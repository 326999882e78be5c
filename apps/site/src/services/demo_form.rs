use serde_json::Value;
use thiserror::Error;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};
use tracing::{debug, info, warn};

use crate::api::DemoRequestSink;
use crate::models::{DemoFormFields, DemoRequest};
use crate::services::query::parse_query;
use crate::storage::{KeyValueStore, StorageError, DRAFT_KEY, SUBMISSION_QUEUE_KEY};

pub const DELIVERED_NOTICE: &str = "Request received. We'll be in touch soon!";
pub const OFFLINE_NOTICE: &str = "Saved locally (offline). We'll sync later.";
pub const FAILURE_NOTICE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Please add your name and email")]
    MissingRequired,
    #[error("local storage failed: {0}")]
    Storage(#[from] StorageError),
}

impl SubmitError {
    /// Text shown in the error toast.
    pub fn notice(&self) -> String {
        match self {
            Self::MissingRequired => self.to_string(),
            Self::Storage(_) => FAILURE_NOTICE.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered(DemoRequest),
    SavedOffline(DemoRequest),
}

impl SubmitOutcome {
    pub fn notice(&self) -> &'static str {
        match self {
            Self::Delivered(_) => DELIVERED_NOTICE,
            Self::SavedOffline(_) => OFFLINE_NOTICE,
        }
    }

    pub fn request(&self) -> &DemoRequest {
        match self {
            Self::Delivered(request) | Self::SavedOffline(request) => request,
        }
    }
}

/// Draft restore and submit-with-fallback for the demo request form.
pub struct DemoFormController<'a, S, B> {
    store: &'a S,
    backend: &'a B,
}

impl<'a, S, B> DemoFormController<'a, S, B>
where
    S: KeyValueStore,
    B: DemoRequestSink,
{
    pub fn new(store: &'a S, backend: &'a B) -> Self {
        Self { store, backend }
    }

    /// Last saved draft, or empty fields when none is stored or it does not parse.
    pub fn load_draft(&self) -> DemoFormFields {
        let raw = match self.store.read(DRAFT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return DemoFormFields::default(),
            Err(err) => {
                debug!("draft unavailable: {err}");
                return DemoFormFields::default();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|err| {
            debug!("discarding malformed draft: {err}");
            DemoFormFields::default()
        })
    }

    pub async fn submit(
        &self,
        fields: &DemoFormFields,
        page_query: &str,
    ) -> Result<SubmitOutcome, SubmitError> {
        self.submit_at(fields, page_query, OffsetDateTime::now_utc())
            .await
    }

    pub async fn submit_at(
        &self,
        fields: &DemoFormFields,
        page_query: &str,
        submitted_at: OffsetDateTime,
    ) -> Result<SubmitOutcome, SubmitError> {
        if !fields.has_required() {
            return Err(SubmitError::MissingRequired);
        }

        let request = build_request(fields, page_query, submitted_at);

        let outcome = match self.backend.submit_demo_request(&request).await {
            Ok(()) => {
                info!(utm_tags = request.utm.len(), "demo request delivered");
                SubmitOutcome::Delivered(request)
            }
            Err(err) => {
                warn!("demo request not delivered, queueing locally: {err}");
                self.enqueue(&request)?;
                SubmitOutcome::SavedOffline(request)
            }
        };

        self.save_draft(fields)?;
        Ok(outcome)
    }

    /// Entries of the offline queue, verbatim.
    pub fn queued(&self) -> Result<Vec<Value>, StorageError> {
        match self.store.read(SUBMISSION_QUEUE_KEY)? {
            Some(raw) if !raw.is_empty() => {
                serde_json::from_str(&raw).map_err(|source| StorageError::Malformed {
                    key: SUBMISSION_QUEUE_KEY.to_string(),
                    source,
                })
            }
            _ => Ok(Vec::new()),
        }
    }

    fn enqueue(&self, request: &DemoRequest) -> Result<(), StorageError> {
        let mut queue = self.queued()?;
        queue.push(serde_json::to_value(request)?);
        let encoded = serde_json::to_string(&queue)?;
        self.store.write(SUBMISSION_QUEUE_KEY, &encoded)?;
        debug!(pending = queue.len(), "demo request queued");
        Ok(())
    }

    fn save_draft(&self, fields: &DemoFormFields) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(fields)?;
        self.store.write(DRAFT_KEY, &encoded)
    }
}

pub fn build_request(
    fields: &DemoFormFields,
    page_query: &str,
    submitted_at: OffsetDateTime,
) -> DemoRequest {
    DemoRequest {
        name: fields.name.clone(),
        email: fields.email.clone(),
        company: fields.company.clone(),
        notes: fields.notes.clone(),
        submitted_at: format_timestamp(submitted_at),
        utm: parse_query(page_query),
    }
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2025-06-01T09:30:00.000Z`.
pub fn format_timestamp(at: OffsetDateTime) -> String {
    let utc = at.to_offset(UtcOffset::UTC);
    utc.format(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    ))
    .unwrap_or_else(|_| utc.unix_timestamp().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ClientError, ClientResult};
    use crate::storage::{MemoryStore, StorageResult};
    use async_trait::async_trait;
    use futures::executor::block_on;
    use reqwest::StatusCode;
    use std::cell::RefCell;
    use time::macros::datetime;

    struct FakeBackend {
        reachable: bool,
        calls: RefCell<Vec<DemoRequest>>,
    }

    impl FakeBackend {
        fn reachable() -> Self {
            Self {
                reachable: true,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn unreachable() -> Self {
            Self {
                reachable: false,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl DemoRequestSink for FakeBackend {
        async fn submit_demo_request(&self, request: &DemoRequest) -> ClientResult<()> {
            self.calls.borrow_mut().push(request.clone());
            if self.reachable {
                Ok(())
            } else {
                Err(ClientError::UnexpectedStatus {
                    status: StatusCode::SERVICE_UNAVAILABLE,
                    body: Vec::new(),
                })
            }
        }
    }

    /// Stands in for a browser with storage disabled.
    struct BlockedStore;

    impl KeyValueStore for BlockedStore {
        fn read(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Unavailable("localStorage is not accessible".into()))
        }

        fn write(&self, key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "blocked".into(),
            })
        }
    }

    fn jane() -> DemoFormFields {
        DemoFormFields {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            ..DemoFormFields::default()
        }
    }

    #[test]
    fn missing_name_or_email_is_rejected_without_side_effects() {
        let store = MemoryStore::new();
        let backend = FakeBackend::reachable();
        let controller = DemoFormController::new(&store, &backend);

        let no_email = DemoFormFields {
            name: "Jane".into(),
            ..DemoFormFields::default()
        };
        let no_name = DemoFormFields {
            email: "jane@x.com".into(),
            ..DemoFormFields::default()
        };

        for fields in [no_email, no_name] {
            let err = block_on(controller.submit(&fields, "?utm_source=x")).unwrap_err();
            assert!(matches!(err, SubmitError::MissingRequired));
            assert_eq!(err.notice(), "Please add your name and email");
        }

        assert_eq!(backend.call_count(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn reachable_backend_delivers_once_and_leaves_queue_alone() {
        let store = MemoryStore::new();
        let backend = FakeBackend::reachable();
        let controller = DemoFormController::new(&store, &backend);

        let outcome = block_on(controller.submit(&jane(), "")).expect("submit");

        assert!(matches!(outcome, SubmitOutcome::Delivered(_)));
        assert_eq!(outcome.notice(), DELIVERED_NOTICE);
        assert_eq!(backend.call_count(), 1);
        assert_eq!(store.get(SUBMISSION_QUEUE_KEY), None);
        assert!(controller.queued().expect("queue").is_empty());
    }

    #[test]
    fn unreachable_backend_queues_request_with_timestamp_and_utm() {
        let store = MemoryStore::new();
        let backend = FakeBackend::unreachable();
        let controller = DemoFormController::new(&store, &backend);
        let at = datetime!(2025-06-01 09:30:00.250 UTC);

        let outcome = block_on(controller.submit_at(
            &jane(),
            "?utm_source=newsletter&utm_medium=email",
            at,
        ))
        .expect("submit");

        assert!(matches!(outcome, SubmitOutcome::SavedOffline(_)));
        assert_eq!(outcome.notice(), OFFLINE_NOTICE);
        assert_eq!(backend.call_count(), 1);

        let queue = controller.queued().expect("queue");
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0]["name"], "Jane");
        assert_eq!(queue[0]["submittedAt"], "2025-06-01T09:30:00.250Z");
        assert_eq!(queue[0]["utm"]["utm_source"], "newsletter");
        assert_eq!(queue[0]["utm"]["utm_medium"], "email");
    }

    #[test]
    fn queue_is_append_only_and_keeps_foreign_entries() {
        let store = MemoryStore::new().with_entry(SUBMISSION_QUEUE_KEY, r#"[{"legacy":true}]"#);
        let backend = FakeBackend::unreachable();
        let controller = DemoFormController::new(&store, &backend);

        block_on(controller.submit(&jane(), "")).expect("first");
        block_on(controller.submit(&jane(), "")).expect("second");

        let queue = controller.queued().expect("queue");
        assert_eq!(queue.len(), 3);
        assert_eq!(queue[0]["legacy"], true);
        assert_eq!(queue[1]["name"], "Jane");
        assert_eq!(queue[2]["email"], "jane@x.com");
    }

    #[test]
    fn missing_client_falls_back_to_queue() {
        let store = MemoryStore::new();
        let backend: Option<FakeBackend> = None;
        let controller = DemoFormController::new(&store, &backend);

        let outcome = block_on(controller.submit(&jane(), "")).expect("submit");

        assert!(matches!(outcome, SubmitOutcome::SavedOffline(_)));
        assert_eq!(controller.queued().expect("queue").len(), 1);
    }

    #[test]
    fn draft_is_saved_regardless_of_outcome() {
        for backend in [FakeBackend::reachable(), FakeBackend::unreachable()] {
            let store = MemoryStore::new();
            let controller = DemoFormController::new(&store, &backend);
            let fields = DemoFormFields {
                company: "Acme Inc".into(),
                ..jane()
            };

            block_on(controller.submit(&fields, "")).expect("submit");

            assert_eq!(controller.load_draft(), fields);
        }
    }

    #[test]
    fn corrupted_queue_surfaces_storage_error_and_skips_draft() {
        let store = MemoryStore::new().with_entry(SUBMISSION_QUEUE_KEY, "{not json");
        let backend = FakeBackend::unreachable();
        let controller = DemoFormController::new(&store, &backend);

        let err = block_on(controller.submit(&jane(), "")).unwrap_err();

        assert!(matches!(err, SubmitError::Storage(_)));
        assert_eq!(err.notice(), FAILURE_NOTICE);
        assert_eq!(store.get(DRAFT_KEY), None);
        assert_eq!(store.get(SUBMISSION_QUEUE_KEY).as_deref(), Some("{not json"));
    }

    #[test]
    fn blocked_storage_degrades_instead_of_failing_hard() {
        let store = BlockedStore;
        let backend = FakeBackend::reachable();
        let controller = DemoFormController::new(&store, &backend);

        assert_eq!(controller.load_draft(), DemoFormFields::default());

        let err = block_on(controller.submit(&jane(), "")).unwrap_err();
        assert!(matches!(err, SubmitError::Storage(StorageError::Write { .. })));
        assert_eq!(err.notice(), FAILURE_NOTICE);
        assert_eq!(backend.call_count(), 1);
    }

    #[test]
    fn load_draft_restores_valid_json() {
        let store = MemoryStore::new().with_entry(
            DRAFT_KEY,
            r#"{"name":"Jane","email":"jane@x.com","company":"Acme","notes":"invoices"}"#,
        );
        let backend = FakeBackend::reachable();
        let controller = DemoFormController::new(&store, &backend);

        let draft = controller.load_draft();

        assert_eq!(draft.name, "Jane");
        assert_eq!(draft.company, "Acme");
        assert_eq!(draft.notes, "invoices");
    }

    #[test]
    fn load_draft_falls_back_to_defaults_when_corrupted() {
        for raw in ["{\"name\":", "42", "not json at all"] {
            let store = MemoryStore::new().with_entry(DRAFT_KEY, raw);
            let backend = FakeBackend::reachable();
            let controller = DemoFormController::new(&store, &backend);

            assert_eq!(controller.load_draft(), DemoFormFields::default());
        }
    }

    #[test]
    fn timestamp_is_utc_with_millis() {
        let at = datetime!(2025-01-02 03:04:05.678 +02:00);
        assert_eq!(format_timestamp(at), "2025-01-02T01:04:05.678Z");
    }
}
