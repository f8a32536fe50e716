use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::screens::Screen;
use crate::state::{Event, IgnoredReason};

use super::catalog::Catalog;
use super::draft::CollageDraft;
use super::errors::CollageError;
use super::picker::ImagePicker;
use super::ports::{NavigationSink, PostSink};
use super::status::{StatusDialog, submit_label};
use super::submission::{
    Acknowledgement, Settlement, SubmissionController, SubmissionState, SubmitOutcome,
};
use super::types::ImageRef;
use super::view::{CollageView, PickerView, SlotView};

/// One collage screen: draft, picker and submission, wired to the post and
/// navigation sinks.
///
/// The draft is locked while a post is in flight: edits are reported as
/// [`IgnoredReason::SubmissionInFlight`] instead of being applied. Cancelling
/// the picker is always allowed because it never touches the draft.
pub struct CollageSession {
    draft: CollageDraft,
    picker: ImagePicker,
    controller: SubmissionController,
    post_sink: Arc<dyn PostSink>,
    navigation: Arc<dyn NavigationSink>,
}

impl CollageSession {
    pub fn new(
        catalog: Catalog,
        post_sink: Arc<dyn PostSink>,
        navigation: Arc<dyn NavigationSink>,
    ) -> Self {
        Self {
            draft: CollageDraft::new(),
            picker: ImagePicker::new(catalog),
            controller: SubmissionController::new(),
            post_sink,
            navigation,
        }
    }

    pub fn draft(&self) -> &CollageDraft {
        &self.draft
    }

    pub fn picker(&self) -> &ImagePicker {
        &self.picker
    }

    pub fn submission_state(&self) -> &SubmissionState {
        self.controller.state()
    }

    pub fn select_slot_image(
        &mut self,
        index: usize,
        image: ImageRef,
    ) -> Result<Vec<Event>, CollageError> {
        if let Some(ignored) = self.edit_lock() {
            return Ok(ignored);
        }
        self.draft.select_image(index, image.clone())?;
        Ok(vec![Event::SlotImageSelected { slot: index, image }])
    }

    pub fn set_note(&mut self, text: impl Into<String>) -> Vec<Event> {
        if let Some(ignored) = self.edit_lock() {
            return ignored;
        }
        let text = text.into();
        self.draft.set_note(text.clone());
        vec![Event::NoteChanged { text }]
    }

    pub fn open_picker(&mut self, slot: usize) -> Result<Vec<Event>, CollageError> {
        if let Some(ignored) = self.edit_lock() {
            return Ok(ignored);
        }
        let replaced = self.picker.open(slot)?;
        Ok(vec![Event::PickerOpened {
            slot,
            replaced: replaced.map(|session| session.slot()),
        }])
    }

    pub fn choose_image(&mut self, image: ImageRef) -> Result<Vec<Event>, CollageError> {
        if let Some(ignored) = self.edit_lock() {
            return Ok(ignored);
        }
        let session = self.picker.choose(self.draft.slots_mut(), image.clone())?;
        Ok(committed(session.slot(), image))
    }

    pub fn choose_catalog_image(&mut self, position: usize) -> Result<Vec<Event>, CollageError> {
        if let Some(ignored) = self.edit_lock() {
            return Ok(ignored);
        }
        let (session, image) = self.picker.choose_at(self.draft.slots_mut(), position)?;
        Ok(committed(session.slot(), image))
    }

    pub fn cancel_picker(&mut self) -> Vec<Event> {
        match self.picker.cancel() {
            Some(session) => vec![Event::PickerClosed {
                slot: session.slot(),
                committed: false,
            }],
            None => vec![Event::MutationIgnored {
                reason: IgnoredReason::NoPickerOpen,
            }],
        }
    }

    /// Validate the draft and start the post. Never waits for the sink.
    pub fn submit(&mut self) -> Vec<Event> {
        match self
            .controller
            .submit(&self.draft, Arc::clone(&self.post_sink))
        {
            SubmitOutcome::Started => vec![Event::PostStarted],
            SubmitOutcome::Rejected(reason) => vec![Event::SubmissionRejected { reason }],
            SubmitOutcome::Ignored => {
                let reason = if self.controller.is_in_flight() {
                    IgnoredReason::SubmissionInFlight
                } else {
                    IgnoredReason::AwaitingAcknowledgement
                };
                vec![Event::MutationIgnored { reason }]
            }
        }
    }

    pub async fn settle(&mut self) -> Settlement {
        self.controller.settle().await
    }

    pub async fn settle_within(&mut self, timeout: Duration) -> Settlement {
        self.controller.settle_within(timeout).await
    }

    pub fn poll_settle(&mut self) -> Settlement {
        self.controller.poll_settle()
    }

    /// Dismiss the status dialog.
    ///
    /// After a success the draft is reset first, then the user is sent to the
    /// landing screen. After a failure nothing else changes.
    pub fn acknowledge(&mut self) -> Vec<Event> {
        match self.controller.acknowledge() {
            Acknowledgement::Completed(ack) => {
                let mut events = Vec::new();
                if let Some(session) = self.picker.cancel() {
                    events.push(Event::PickerClosed {
                        slot: session.slot(),
                        committed: false,
                    });
                }
                self.draft.reset();
                self.navigation.navigate(Screen::Landing);
                info!(
                    event = "core.collage.draft_reset",
                    post_id = %ack.post_id
                );
                events.extend([
                    Event::DraftReset,
                    Event::NavigationRequested {
                        to: Screen::Landing,
                    },
                ]);
                events
            }
            Acknowledgement::Dismissed(reason) => vec![Event::FailureDismissed { reason }],
            Acknowledgement::Ignored => vec![Event::MutationIgnored {
                reason: IgnoredReason::NothingToAcknowledge,
            }],
        }
    }

    pub fn view(&self) -> CollageView {
        let state = self.controller.state();
        let picker = self.picker.session().map(|session| PickerView {
            slot: session.slot(),
            title: format!("Choose Image for Slot {}", session.slot() + 1),
            candidates: self.picker.catalog().images().to_vec(),
        });

        CollageView {
            slots: self
                .draft
                .slots()
                .iter()
                .enumerate()
                .map(|(index, image)| SlotView {
                    index,
                    image: image.cloned(),
                })
                .collect(),
            note: self.draft.note().as_str().to_string(),
            submission: state.name(),
            failure_reason: state.failure_reason(),
            submit_label: submit_label(state),
            picker,
            status_dialog: StatusDialog::for_state(state),
        }
    }

    fn edit_lock(&self) -> Option<Vec<Event>> {
        self.controller.is_in_flight().then(|| {
            vec![Event::MutationIgnored {
                reason: IgnoredReason::SubmissionInFlight,
            }]
        })
    }
}

fn committed(slot: usize, image: ImageRef) -> Vec<Event> {
    vec![
        Event::SlotImageSelected { slot, image },
        Event::PickerClosed {
            slot,
            committed: true,
        },
    ]
}
