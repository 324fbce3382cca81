use std::io::Write;

use dialoguer::Confirm;

use crate::{
    consts::consts::CONFIRMATION_UNAVAILABLE,
    render::{card::Panel, markup, text},
    view::View,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Html,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmMode {
    /// Ask on the terminal, anything but an explicit yes declines
    Prompt,
    /// `--yes` was given
    AssumeYes,
}

/// Terminal stand-in for the search page: panels and notifications are written to `out`
pub struct TerminalView<W> {
    out: W,
    format: OutputFormat,
    confirm_mode: ConfirmMode,
    search_field: bool,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, format: OutputFormat, confirm_mode: ConfirmMode) -> Self {
        Self {
            out,
            format,
            confirm_mode,
            search_field: true,
        }
    }

    /// One-shot commands have nowhere to type a query
    pub fn without_search_field(mut self) -> Self {
        self.search_field = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// A prompt that could not be shown declines, and the user is told why
    fn resolve_confirmation(&mut self, answer: dialoguer::Result<bool>) -> bool {
        match answer {
            Ok(answer) => answer,
            Err(err) => {
                log::warn!("Unable to prompt for confirmation: {}", err);
                self.notify(CONFIRMATION_UNAVAILABLE);
                false
            }
        }
    }

    fn write_line(&mut self, line: &str) {
        if let Err(err) = writeln!(self.out, "{}", line) {
            log::warn!("Unable to write to terminal: {}", err);
        }
    }
}

impl<W: Write> View for TerminalView<W> {
    fn show(&mut self, panel: Panel) {
        let rendered = match self.format {
            OutputFormat::Text => text::to_text(&panel),
            OutputFormat::Html => markup::to_html(&panel),
        };

        self.write_line(&rendered);
    }

    fn notify(&mut self, message: &str) {
        self.write_line(&format!("» {}", message));
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        match self.confirm_mode {
            ConfirmMode::AssumeYes => true,
            ConfirmMode::Prompt => {
                let answer = Confirm::new()
                    .with_prompt(prompt)
                    .default(false)
                    .interact();

                self.resolve_confirmation(answer)
            }
        }
    }

    fn has_search_field(&self) -> bool {
        self.search_field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::consts::{EMPTY_RESULTS_MESSAGE, LOADING_MESSAGE};

    fn output(view: TerminalView<Vec<u8>>) -> String {
        String::from_utf8(view.into_inner()).expect("should be utf8")
    }

    #[test]
    fn writes_text_panels_and_notifications() {
        let mut view = TerminalView::new(Vec::new(), OutputFormat::Text, ConfirmMode::AssumeYes);

        view.show(Panel::Loading);
        view.show(Panel::Empty);
        view.notify("feito");

        assert_eq!(
            output(view),
            format!("{}\n{}\n» feito\n", LOADING_MESSAGE, EMPTY_RESULTS_MESSAGE)
        );
    }

    #[test]
    fn writes_markup_when_asked() {
        let mut view = TerminalView::new(Vec::new(), OutputFormat::Html, ConfirmMode::AssumeYes);

        view.show(Panel::Loading);

        assert_eq!(output(view), format!("<p>{}</p>\n", LOADING_MESSAGE));
    }

    #[test]
    fn assume_yes_confirms_without_prompting() {
        let mut view = TerminalView::new(Vec::new(), OutputFormat::Text, ConfirmMode::AssumeYes);

        assert!(view.confirm("?"));
    }

    #[test]
    fn unavailable_prompt_declines_and_says_why() {
        let mut view = TerminalView::new(Vec::new(), OutputFormat::Text, ConfirmMode::Prompt);

        let answer = Err(dialoguer::Error::IO(std::io::Error::new(
            std::io::ErrorKind::NotConnected,
            "not a terminal",
        )));

        assert!(!view.resolve_confirmation(answer));
        assert_eq!(output(view), format!("» {}\n", CONFIRMATION_UNAVAILABLE));
    }

    #[test]
    fn prompt_answers_pass_through_silently() {
        let mut view = TerminalView::new(Vec::new(), OutputFormat::Text, ConfirmMode::Prompt);

        assert!(view.resolve_confirmation(Ok(true)));
        assert!(!view.resolve_confirmation(Ok(false)));
        assert_eq!(output(view), "");
    }

    #[test]
    fn search_field_can_be_removed() {
        let view = TerminalView::new(Vec::new(), OutputFormat::Text, ConfirmMode::AssumeYes);
        assert!(view.has_search_field());

        let view = view.without_search_field();
        assert!(!view.has_search_field());
    }
}
