//! Document review state machine.
//!
//! A pure reducer in the style of an Elm update function: the component
//! feeds it events, it updates its internal phase and returns the commands
//! to execute (HTTP calls, refetch, toasts). No IO happens in here, which is
//! what makes the ordering and guard invariants testable without a browser.
//!
//! The phase is a single tagged union, so impossible combinations (approving
//! while rejecting, transitioning while the save is still in flight) cannot
//! be represented:
//!
//! ```text
//! Idle -> Saving { then: None }            plain save
//! Idle -> Saving { then: Some(target) }    approve/reject with unsaved edits
//! Idle -> Transitioning(target)            approve/reject, draft clean
//! Saving { then: Some(t) } -> Transitioning(t)   only after the save lands
//! ```
//!
//! The save must land before the status call is issued; a failed save aborts
//! the whole transition. Approval of a document that carries a file
//! reference additionally fires the processing trigger, whose failure is
//! reported but never rolls the approval back.

use common::model::document::{Document, DocumentStatus};
use common::requests::{ProcessDocumentRequest, UpdateDocumentRequest};

use crate::notify::Level;

#[derive(Debug, Clone, PartialEq)]
pub enum ReviewPhase {
    Idle,
    Saving { then: Option<DocumentStatus> },
    Transitioning(DocumentStatus),
}

#[derive(Debug, Clone)]
pub enum ReviewEvent {
    /// Save button; carries the draft's pending edits (None when clean).
    SaveRequested {
        edits: Option<UpdateDocumentRequest>,
    },
    /// Approve or Reject button.
    TransitionRequested {
        target: DocumentStatus,
        edits: Option<UpdateDocumentRequest>,
    },
    SaveCompleted,
    SaveFailed(String),
    /// Status update acknowledged; carries the row the backend returned.
    TransitionCompleted(Document),
    TransitionFailed(String),
    ProcessingAccepted,
    ProcessingFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReviewCommand {
    PersistEdits(UpdateDocumentRequest),
    SetStatus(DocumentStatus),
    TriggerProcessing(ProcessDocumentRequest),
    Refetch,
    Notify(Level, String),
}

pub struct ReviewMachine {
    document_id: i64,
    status: DocumentStatus,
    phase: ReviewPhase,
}

impl ReviewMachine {
    pub fn new(document: &Document) -> Self {
        ReviewMachine {
            document_id: document.id,
            status: document.status,
            phase: ReviewPhase::Idle,
        }
    }

    pub fn phase(&self) -> &ReviewPhase {
        &self.phase
    }

    pub fn status(&self) -> DocumentStatus {
        self.status
    }

    /// Anything in flight blocks starting another save/approve/reject.
    pub fn is_busy(&self) -> bool {
        self.phase != ReviewPhase::Idle
    }

    /// Merge refetched canonical state. The phase is left alone: a refetch
    /// lands asynchronously and must not cancel an operation in flight.
    pub fn sync(&mut self, document: &Document) {
        self.document_id = document.id;
        self.status = document.status;
    }

    pub fn decide(&mut self, event: ReviewEvent) -> Vec<ReviewCommand> {
        match event {
            ReviewEvent::SaveRequested { edits } => {
                if self.is_busy() {
                    return Vec::new();
                }
                match edits {
                    Some(edits) => {
                        self.phase = ReviewPhase::Saving { then: None };
                        vec![ReviewCommand::PersistEdits(edits)]
                    }
                    None => Vec::new(),
                }
            }
            ReviewEvent::TransitionRequested { target, edits } => {
                if self.is_busy() || target == self.status {
                    return Vec::new();
                }
                match edits {
                    Some(edits) => {
                        self.phase = ReviewPhase::Saving { then: Some(target) };
                        vec![ReviewCommand::PersistEdits(edits)]
                    }
                    None => {
                        self.phase = ReviewPhase::Transitioning(target);
                        vec![ReviewCommand::SetStatus(target)]
                    }
                }
            }
            ReviewEvent::SaveCompleted => match self.phase.clone() {
                ReviewPhase::Saving { then: None } => {
                    self.phase = ReviewPhase::Idle;
                    vec![
                        ReviewCommand::Notify(Level::Info, "Changes saved.".to_string()),
                        ReviewCommand::Refetch,
                    ]
                }
                // Success toast suppressed: the save is only the first half.
                ReviewPhase::Saving { then: Some(target) } => {
                    self.phase = ReviewPhase::Transitioning(target);
                    vec![ReviewCommand::SetStatus(target)]
                }
                _ => Vec::new(),
            },
            ReviewEvent::SaveFailed(reason) => match self.phase.clone() {
                ReviewPhase::Saving { then } => {
                    self.phase = ReviewPhase::Idle;
                    let message = match then {
                        Some(target) => format!(
                            "Could not save your edits, so the {} was not attempted: {reason}",
                            action_noun(target)
                        ),
                        None => format!("Could not save your edits: {reason}"),
                    };
                    vec![ReviewCommand::Notify(Level::Error, message)]
                }
                _ => Vec::new(),
            },
            ReviewEvent::TransitionCompleted(document) => match self.phase.clone() {
                ReviewPhase::Transitioning(target) => {
                    self.phase = ReviewPhase::Idle;
                    self.status = document.status;
                    let mut commands = Vec::new();
                    if target == DocumentStatus::Approved {
                        if let Some(pdf_url) = &document.pdf_url {
                            commands.push(ReviewCommand::TriggerProcessing(
                                ProcessDocumentRequest {
                                    document_id: self.document_id,
                                    pdf_url: pdf_url.clone(),
                                },
                            ));
                        }
                    }
                    commands.push(ReviewCommand::Refetch);
                    commands.push(ReviewCommand::Notify(
                        Level::Info,
                        format!("Document {}.", document.status.as_str()),
                    ));
                    commands
                }
                _ => Vec::new(),
            },
            ReviewEvent::TransitionFailed(reason) => match self.phase.clone() {
                ReviewPhase::Transitioning(target) => {
                    self.phase = ReviewPhase::Idle;
                    // Distinct from a save failure: the edits are already
                    // persisted, only the status call needs a retry.
                    vec![
                        ReviewCommand::Notify(
                            Level::Error,
                            format!(
                                "Your edits were saved, but the {} failed: {reason}. \
                                 Click the action again to retry; edits will not be re-sent.",
                                action_noun(target)
                            ),
                        ),
                        ReviewCommand::Refetch,
                    ]
                }
                _ => Vec::new(),
            },
            ReviewEvent::ProcessingAccepted => Vec::new(),
            ReviewEvent::ProcessingFailed(reason) => vec![ReviewCommand::Notify(
                Level::Error,
                format!("The approval stands, but processing could not be started: {reason}"),
            )],
        }
    }
}

fn action_noun(target: DocumentStatus) -> &'static str {
    match target {
        DocumentStatus::Approved => "approval",
        DocumentStatus::Rejected => "rejection",
        DocumentStatus::Pending => "status change",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(status: DocumentStatus, pdf_url: Option<&str>) -> Document {
        Document {
            id: 42,
            title: "Budget Leak 2024".into(),
            description: String::new(),
            country: "Kenya".into(),
            state_province: String::new(),
            admin_level: String::new(),
            pdf_url: pdf_url.map(Into::into),
            status,
            generated_tags: Vec::new(),
            ocr_text: None,
            approved_by: None,
            approved_at: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn title_edit() -> UpdateDocumentRequest {
        UpdateDocumentRequest {
            title: Some("Budget Leak 2024".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_approve_with_edits_saves_then_transitions_then_processes() {
        let pending = document(DocumentStatus::Pending, Some("https://files.example/42.pdf"));
        let mut machine = ReviewMachine::new(&pending);

        let commands = machine.decide(ReviewEvent::TransitionRequested {
            target: DocumentStatus::Approved,
            edits: Some(title_edit()),
        });
        assert_eq!(commands, vec![ReviewCommand::PersistEdits(title_edit())]);
        assert!(machine.is_busy());

        let commands = machine.decide(ReviewEvent::SaveCompleted);
        assert_eq!(
            commands,
            vec![ReviewCommand::SetStatus(DocumentStatus::Approved)]
        );

        let approved = document(
            DocumentStatus::Approved,
            Some("https://files.example/42.pdf"),
        );
        let commands = machine.decide(ReviewEvent::TransitionCompleted(approved));
        assert_eq!(
            commands[0],
            ReviewCommand::TriggerProcessing(ProcessDocumentRequest {
                document_id: 42,
                pdf_url: "https://files.example/42.pdf".into(),
            })
        );
        assert_eq!(commands[1], ReviewCommand::Refetch);
        assert!(matches!(commands[2], ReviewCommand::Notify(Level::Info, _)));
        assert!(!machine.is_busy());
        assert_eq!(machine.status(), DocumentStatus::Approved);
    }

    #[test]
    fn test_clean_draft_skips_the_save_call() {
        let pending = document(DocumentStatus::Pending, None);
        let mut machine = ReviewMachine::new(&pending);

        let commands = machine.decide(ReviewEvent::TransitionRequested {
            target: DocumentStatus::Rejected,
            edits: None,
        });
        assert_eq!(
            commands,
            vec![ReviewCommand::SetStatus(DocumentStatus::Rejected)]
        );
    }

    #[test]
    fn test_in_flight_guard_allows_exactly_one_transition() {
        let pending = document(DocumentStatus::Pending, Some("https://files.example/42.pdf"));
        let mut machine = ReviewMachine::new(&pending);

        let first = machine.decide(ReviewEvent::TransitionRequested {
            target: DocumentStatus::Approved,
            edits: None,
        });
        assert_eq!(first.len(), 1);

        // A second click (same or opposite action) while in flight is inert.
        let second = machine.decide(ReviewEvent::TransitionRequested {
            target: DocumentStatus::Approved,
            edits: None,
        });
        assert!(second.is_empty());
        let third = machine.decide(ReviewEvent::TransitionRequested {
            target: DocumentStatus::Rejected,
            edits: None,
        });
        assert!(third.is_empty());

        // The one in-flight approval completes with one processing trigger.
        let approved = document(
            DocumentStatus::Approved,
            Some("https://files.example/42.pdf"),
        );
        let commands = machine.decide(ReviewEvent::TransitionCompleted(approved));
        let triggers = commands
            .iter()
            .filter(|command| matches!(command, ReviewCommand::TriggerProcessing(_)))
            .count();
        assert_eq!(triggers, 1);
    }

    #[test]
    fn test_same_status_transition_is_a_no_op() {
        let approved = document(DocumentStatus::Approved, None);
        let mut machine = ReviewMachine::new(&approved);
        let commands = machine.decide(ReviewEvent::TransitionRequested {
            target: DocumentStatus::Approved,
            edits: None,
        });
        assert!(commands.is_empty());
        assert!(!machine.is_busy());
    }

    #[test]
    fn test_failed_save_aborts_the_transition() {
        let pending = document(DocumentStatus::Pending, None);
        let mut machine = ReviewMachine::new(&pending);

        machine.decide(ReviewEvent::TransitionRequested {
            target: DocumentStatus::Approved,
            edits: Some(title_edit()),
        });
        let commands = machine.decide(ReviewEvent::SaveFailed("500".into()));

        assert_eq!(commands.len(), 1);
        let ReviewCommand::Notify(level, message) = &commands[0] else {
            panic!("expected a notification, got {commands:?}");
        };
        assert_eq!(*level, Level::Error);
        assert!(message.contains("approval was not attempted"));
        assert!(!machine.is_busy());
        assert_eq!(machine.status(), DocumentStatus::Pending);
    }

    #[test]
    fn test_partial_failure_reports_distinctly_and_refetches() {
        let pending = document(DocumentStatus::Pending, None);
        let mut machine = ReviewMachine::new(&pending);

        machine.decide(ReviewEvent::TransitionRequested {
            target: DocumentStatus::Approved,
            edits: Some(title_edit()),
        });
        machine.decide(ReviewEvent::SaveCompleted);
        let commands = machine.decide(ReviewEvent::TransitionFailed("timeout".into()));

        let ReviewCommand::Notify(level, message) = &commands[0] else {
            panic!("expected a notification, got {commands:?}");
        };
        assert_eq!(*level, Level::Error);
        assert!(message.contains("edits were saved"));
        assert!(message.contains("approval failed"));
        assert_eq!(commands[1], ReviewCommand::Refetch);
        assert!(!machine.is_busy());

        // The retry now runs against a clean draft: status call only.
        let retry = machine.decide(ReviewEvent::TransitionRequested {
            target: DocumentStatus::Approved,
            edits: None,
        });
        assert_eq!(
            retry,
            vec![ReviewCommand::SetStatus(DocumentStatus::Approved)]
        );
    }

    #[test]
    fn test_rejection_never_triggers_processing() {
        let pending = document(DocumentStatus::Pending, Some("https://files.example/42.pdf"));
        let mut machine = ReviewMachine::new(&pending);

        machine.decide(ReviewEvent::TransitionRequested {
            target: DocumentStatus::Rejected,
            edits: None,
        });
        let rejected = document(
            DocumentStatus::Rejected,
            Some("https://files.example/42.pdf"),
        );
        let commands = machine.decide(ReviewEvent::TransitionCompleted(rejected));
        assert!(commands
            .iter()
            .all(|command| !matches!(command, ReviewCommand::TriggerProcessing(_))));
    }

    #[test]
    fn test_approval_without_file_reference_skips_processing() {
        let pending = document(DocumentStatus::Pending, None);
        let mut machine = ReviewMachine::new(&pending);

        machine.decide(ReviewEvent::TransitionRequested {
            target: DocumentStatus::Approved,
            edits: None,
        });
        let approved = document(DocumentStatus::Approved, None);
        let commands = machine.decide(ReviewEvent::TransitionCompleted(approved));
        assert!(commands
            .iter()
            .all(|command| !matches!(command, ReviewCommand::TriggerProcessing(_))));
    }

    #[test]
    fn test_processing_failure_does_not_roll_back() {
        let pending = document(DocumentStatus::Pending, Some("https://files.example/42.pdf"));
        let mut machine = ReviewMachine::new(&pending);

        machine.decide(ReviewEvent::TransitionRequested {
            target: DocumentStatus::Approved,
            edits: None,
        });
        let approved = document(
            DocumentStatus::Approved,
            Some("https://files.example/42.pdf"),
        );
        machine.decide(ReviewEvent::TransitionCompleted(approved));
        assert_eq!(machine.status(), DocumentStatus::Approved);

        let commands = machine.decide(ReviewEvent::ProcessingFailed("queue full".into()));
        assert_eq!(commands.len(), 1);
        assert!(matches!(
            &commands[0],
            ReviewCommand::Notify(Level::Error, message) if message.contains("approval stands")
        ));
        assert_eq!(machine.status(), DocumentStatus::Approved);
    }

    #[test]
    fn test_plain_save_round_trip() {
        let pending = document(DocumentStatus::Pending, None);
        let mut machine = ReviewMachine::new(&pending);

        let commands = machine.decide(ReviewEvent::SaveRequested {
            edits: Some(title_edit()),
        });
        assert_eq!(commands, vec![ReviewCommand::PersistEdits(title_edit())]);

        let commands = machine.decide(ReviewEvent::SaveCompleted);
        assert!(matches!(commands[0], ReviewCommand::Notify(Level::Info, _)));
        assert_eq!(commands[1], ReviewCommand::Refetch);
        assert!(!machine.is_busy());
    }

    #[test]
    fn test_save_with_clean_draft_is_inert() {
        let pending = document(DocumentStatus::Pending, None);
        let mut machine = ReviewMachine::new(&pending);
        let commands = machine.decide(ReviewEvent::SaveRequested { edits: None });
        assert!(commands.is_empty());
        assert!(!machine.is_busy());
    }

    #[test]
    fn test_stale_completions_are_ignored_when_idle() {
        let pending = document(DocumentStatus::Pending, None);
        let mut machine = ReviewMachine::new(&pending);
        assert!(machine.decide(ReviewEvent::SaveCompleted).is_empty());
        assert!(machine
            .decide(ReviewEvent::TransitionFailed("late".into()))
            .is_empty());
    }
}
