//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Main menu drives the transcript view: sort key, direction, page number, page
//! stepping, the add-student and add-grade forms, refresh, quit.

use crate::adapters::ui::progress::spinner;
use crate::adapters::ui::render::{print_page, print_status};
use crate::domain::{DomainError, NewStudentForm, SortDirection, SortKey};
use crate::ports::InputPort;
use crate::usecases::{EnrollmentService, TranscriptView};
use async_trait::async_trait;
use crossterm::style::Color;
use inquire::ui::{Color as PromptColor, RenderConfig, Styled};
use inquire::{InquireError, Select, Text};
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Apply the prompt theme for every subsequent inquire prompt.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("?").with_fg(PromptColor::LightCyan))
        .with_highlighted_option_prefix(Styled::new(">").with_fg(PromptColor::LightGreen))
        .with_answered_prompt_prefix(Styled::new("+").with_fg(PromptColor::LightGreen));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    SortBy,
    Direction,
    PageNumber,
    NextPage,
    PreviousPage,
    AddStudent,
    AddGrade,
    Refresh,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 9] = [
        MenuAction::SortBy,
        MenuAction::Direction,
        MenuAction::PageNumber,
        MenuAction::NextPage,
        MenuAction::PreviousPage,
        MenuAction::AddStudent,
        MenuAction::AddGrade,
        MenuAction::Refresh,
        MenuAction::Quit,
    ];
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuAction::SortBy => "Sort by",
            MenuAction::Direction => "Sort direction",
            MenuAction::PageNumber => "Page #",
            MenuAction::NextPage => "Next page",
            MenuAction::PreviousPage => "Previous page",
            MenuAction::AddStudent => "Add student",
            MenuAction::AddGrade => "Add grade",
            MenuAction::Refresh => "Refresh",
            MenuAction::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// Page number one step away from `current`, never below 1. Unset goes to page 1.
fn step_page(current: Option<usize>, forward: bool) -> usize {
    match (current, forward) {
        (None, _) => 1,
        (Some(p), true) => p.saturating_add(1),
        (Some(p), false) => p.saturating_sub(1).max(1),
    }
}

/// Cancel/interrupt ends the session; other prompt failures are UI errors.
fn is_cancel(e: &InquireError) -> bool {
    matches!(
        e,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

fn ui_err(e: InquireError) -> DomainError {
    DomainError::Ui(e.to_string())
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    view: Mutex<TranscriptView>,
    enrollment: Arc<EnrollmentService>,
}

impl TuiInputPort {
    pub fn new(view: TranscriptView, enrollment: Arc<EnrollmentService>) -> Self {
        Self {
            view: Mutex::new(view),
            enrollment,
        }
    }

    async fn reload(&self, message: &str) {
        let pb = spinner(message);
        let loaded = self.view.lock().await.refresh().await;
        pb.finish_and_clear();
        if !loaded {
            print_status("Could not reach the transcript service; list unchanged.", Color::Red);
        }
    }

    /// Handle one menu choice. Returns `false` when the user quits.
    async fn dispatch(&self, action: MenuAction) -> Result<bool, InquireError> {
        match action {
            MenuAction::SortBy => {
                let key = Select::new("Sort by", SortKey::ALL.to_vec()).prompt()?;
                self.view.lock().await.set_sort_key(key);
            }
            MenuAction::Direction => {
                let direction = Select::new("Direction", SortDirection::ALL.to_vec()).prompt()?;
                self.view.lock().await.set_direction(direction);
            }
            MenuAction::PageNumber => {
                let current = self.view.lock().await.page_field().text().to_string();
                let raw = Text::new("Page #")
                    .with_initial_value(&current)
                    .prompt()?;
                if self.view.lock().await.set_page_input(&raw).is_none() {
                    print_status("Page cleared: enter a whole number of 1 or more.", Color::Yellow);
                }
            }
            MenuAction::NextPage | MenuAction::PreviousPage => {
                let mut view = self.view.lock().await;
                let current = view.page_field().page().map(|p| p.get());
                let next = step_page(current, action == MenuAction::NextPage);
                view.set_page_input(&next.to_string());
            }
            MenuAction::AddStudent => self.add_student().await?,
            MenuAction::AddGrade => self.add_grade().await?,
            MenuAction::Refresh => self.reload("Refreshing transcripts...").await,
            MenuAction::Quit => return Ok(false),
        }
        Ok(true)
    }

    async fn add_student(&self) -> Result<(), InquireError> {
        let name = Text::new("Student name").prompt()?;
        match self
            .enrollment
            .submit_student(&NewStudentForm::new(&name))
            .await
        {
            Ok(id) => {
                print_status(&format!("Created student #{}", id), Color::Green);
                self.reload("Refreshing transcripts...").await;
            }
            Err(e) => print_status(&format!("Could not create student: {}", e), Color::Red),
        }
        Ok(())
    }

    async fn add_grade(&self) -> Result<(), InquireError> {
        let student_id = Text::new("Student ID").prompt()?;
        let course = Text::new("Course number").prompt()?;
        let grade = Text::new("Grade").prompt()?;
        match self
            .enrollment
            .submit_grade(&student_id, &course, &grade)
            .await
        {
            Ok(form) => {
                print_status(
                    &format!(
                        "Recorded {} in {} for student #{}",
                        form.grade, form.course, form.student_id
                    ),
                    Color::Green,
                );
                self.reload("Refreshing transcripts...").await;
            }
            Err(e) => print_status(&format!("Could not record grade: {}", e), Color::Red),
        }
        Ok(())
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let pb = spinner("Loading transcripts...");
        let loaded = self.view.lock().await.mount().await;
        pb.finish_and_clear();
        if !loaded {
            print_status("Could not load transcripts; the list is empty.", Color::Red);
        }

        loop {
            print_page(&self.view.lock().await.snapshot());
            let action = match Select::new("What next?", MenuAction::ALL.to_vec()).prompt() {
                Ok(a) => a,
                Err(e) if is_cancel(&e) => return Ok(()),
                Err(e) => return Err(ui_err(e)),
            };
            match self.dispatch(action).await {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                // Escape inside a sub-prompt returns to the menu.
                Err(InquireError::OperationCanceled) => {}
                Err(InquireError::OperationInterrupted) => return Ok(()),
                Err(e) => return Err(ui_err(e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_page() {
        assert_eq!(step_page(None, true), 1);
        assert_eq!(step_page(None, false), 1);
        assert_eq!(step_page(Some(3), true), 4);
        assert_eq!(step_page(Some(3), false), 2);
        assert_eq!(step_page(Some(1), false), 1);
    }

    #[test]
    fn test_menu_labels() {
        assert_eq!(MenuAction::PageNumber.to_string(), "Page #");
        assert_eq!(MenuAction::ALL.len(), 9);
    }
}
