//! View-model for the project detail modal.
//!
//! The modal is a three-state machine: closed, open with the image at rest,
//! and open with the image revealed. The reveal is timer-driven, so every
//! open cycle issues a generation ticket; a reveal carrying a ticket that no
//! longer matches is rejected. A late-firing timer from an earlier open can
//! therefore never touch newer state.

use std::time::Duration;

use crate::content::Project;

/// Pause between the modal opening and the image pan/zoom starting.
pub const REVEAL_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectModal {
    selected: Option<&'static Project>,
    open: bool,
    image_revealed: bool,
    generation: u64,
}

impl ProjectModal {
    /// Select a project and open the modal, returning the reveal ticket for
    /// this open cycle.
    ///
    /// Opening while already open switches the selection in place; the modal
    /// stays open and the previous cycle's ticket is invalidated.
    pub fn open(&mut self, project: &'static Project) -> u64 {
        self.selected = Some(project);
        self.open = true;
        self.image_revealed = false;
        self.generation += 1;
        self.generation
    }

    /// Start the image pan/zoom for the open cycle identified by `ticket`.
    ///
    /// Returns whether the reveal was applied. A ticket from a cycle that has
    /// since been closed or replaced is a no-op.
    pub fn reveal(&mut self, ticket: u64) -> bool {
        if self.open && ticket == self.generation {
            self.image_revealed = true;
            true
        } else {
            false
        }
    }

    /// Close the modal. Closing an already-closed modal is a no-op.
    ///
    /// The selection is left in place; it is never rendered while closed and
    /// is overwritten by the next open.
    pub fn close(&mut self) {
        self.open = false;
        self.image_revealed = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> Option<&'static Project> {
        self.selected
    }

    pub fn image_revealed(&self) -> bool {
        self.image_revealed
    }

    /// The project to render, if the modal is open.
    pub fn visible(&self) -> Option<&'static Project> {
        if self.open {
            self.selected
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    // ========================================================================
    // Open / select
    // ========================================================================

    #[test]
    fn opening_any_tile_selects_that_project() {
        for project in &PROJECTS {
            let mut modal = ProjectModal::default();
            modal.open(project);

            assert!(modal.is_open());
            assert_eq!(modal.selected(), Some(project));
            assert!(!modal.image_revealed());
        }
    }

    #[test]
    fn nothing_is_visible_before_the_first_open() {
        let modal = ProjectModal::default();
        assert!(!modal.is_open());
        assert_eq!(modal.visible(), None);
    }

    #[test]
    fn switching_projects_keeps_the_modal_open() {
        let wse = PROJECTS
            .iter()
            .find(|p| p.title.starts_with("WSE"))
            .unwrap();
        let scs = PROJECTS.iter().find(|p| p.title == "SCS").unwrap();

        let mut modal = ProjectModal::default();
        let first = modal.open(wse);
        assert!(modal.is_open());

        let second = modal.open(scs);
        assert!(modal.is_open());
        assert_eq!(modal.selected(), Some(scs));

        // The ticket from the replaced cycle must not reveal the new image.
        assert!(!modal.reveal(first));
        assert!(!modal.image_revealed());
        assert!(modal.reveal(second));
        assert!(modal.image_revealed());
    }

    // ========================================================================
    // Reveal
    // ========================================================================

    #[test]
    fn reveal_applies_with_the_current_ticket() {
        let mut modal = ProjectModal::default();
        let ticket = modal.open(&PROJECTS[0]);

        assert_eq!(REVEAL_DELAY, Duration::from_millis(500));
        assert!(modal.reveal(ticket));
        assert!(modal.image_revealed());
    }

    #[test]
    fn reveal_after_close_is_rejected_for_that_cycle() {
        let mut modal = ProjectModal::default();
        let ticket = modal.open(&PROJECTS[0]);
        modal.close();

        assert!(!modal.reveal(ticket));
        assert!(!modal.image_revealed());
    }

    #[test]
    fn stale_ticket_is_rejected_after_a_reopen() {
        let mut modal = ProjectModal::default();
        let stale = modal.open(&PROJECTS[0]);
        modal.close();
        let fresh = modal.open(&PROJECTS[1]);

        assert!(!modal.reveal(stale));
        assert!(!modal.image_revealed());
        assert!(modal.reveal(fresh));
    }

    // ========================================================================
    // Close
    // ========================================================================

    #[test]
    fn closing_resets_open_and_reveal() {
        let mut modal = ProjectModal::default();
        let ticket = modal.open(&PROJECTS[2]);
        modal.reveal(ticket);
        modal.close();

        assert!(!modal.is_open());
        assert!(!modal.image_revealed());
        assert_eq!(modal.visible(), None);
    }

    #[test]
    fn closing_an_already_closed_modal_is_a_no_op() {
        let mut modal = ProjectModal::default();
        modal.close();
        assert_eq!(modal, ProjectModal::default());

        modal.open(&PROJECTS[0]);
        modal.close();
        let after_first_close = modal;
        modal.close();
        assert_eq!(modal, after_first_close);
    }
}
