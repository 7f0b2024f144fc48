//! Auth gate screens: splash carousel, sign-up and OTP entry.

use std::time::Instant;

use crate::components::footer::hint_line;
use crate::keymap::{Action, Keymap};
use crate::state::auth::{OtpState, SignUpState, SplashState, OTP_LENGTH, SPLASH_SLIDES};
use crate::state::tabs::PrimaryTab;
use crate::styles::theme;
use crate::utils::center_fixed;
use crate::widgets::{TextInputWidget, TextInputWidgetExt, ThyneLogo};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

const CARD_WIDTH: u16 = 56;

fn tagline(section: PrimaryTab) -> (&'static str, &'static str) {
    match section {
        PrimaryTab::Commerce => ("Shop fine jewellery", "Curated gold, diamond and pearl collections"),
        PrimaryTab::Community => ("Join the community", "See how others style their favourite pieces"),
        PrimaryTab::Create => ("Create with AI", "Describe a piece and watch it come to life"),
    }
}

pub struct SplashScreen;

impl SplashScreen {
    pub fn render(frame: &mut Frame, area: Rect, splash: &SplashState) {
        let t = theme();
        let logo = ThyneLogo::large();
        let card = center_fixed(area, CARD_WIDTH, logo.height() + 9);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(logo.height() + 1), Constraint::Min(0)])
            .split(card);
        frame.render_widget(logo, center_fixed(chunks[0], logo.width(), logo.height()));

        let (title, subtitle) = tagline(splash.section());
        let dots: Vec<Span> = (0..SPLASH_SLIDES.len())
            .map(|i| {
                if i == splash.slide() {
                    Span::styled("● ", t.title_style())
                } else {
                    Span::styled("○ ", t.muted_style())
                }
            })
            .collect();

        let lines = vec![
            Line::styled(title, t.text_style().add_modifier(Modifier::BOLD)),
            Line::styled(subtitle, t.muted_style()),
            Line::default(),
            Line::from(dots),
            Line::default(),
            Line::styled("Press any key to continue", t.muted_style()),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), chunks[1]);
    }
}

pub struct SignUpScreen;

impl SignUpScreen {
    pub fn render(frame: &mut Frame, area: Rect, signup: &SignUpState, keymap: &Keymap) {
        let t = theme();
        let card = center_fixed(area, CARD_WIDTH, 15);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(" Welcome to Thyne ")
            .title_style(t.title_style())
            .title_alignment(Alignment::Center);
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new("Sign up with your phone number or email")
                .style(t.muted_style())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            chunks[0],
        );

        let input = TextInputWidget::new(&signup.input)
            .title("Phone or email")
            .placeholder("98765 43210 or you@example.com")
            .error(signup.error.map(|e| e.to_string()))
            .focused(true);
        frame.render_text_input_widget(input, chunks[1]);

        let checkbox = |on: bool| if on { "[x]" } else { "[ ]" };
        let toggles = vec![
            Line::from(vec![
                Span::styled(format!("{} ", checkbox(signup.notify_me)), t.emphasis_style()),
                Span::styled("Notify me about offers", t.text_style()),
                Span::styled(format!("  ({})", keymap.get_key_display_for_action(Action::ToggleNotify)), t.muted_style()),
            ]),
            Line::from(vec![
                Span::styled(format!("{} ", checkbox(signup.subscribe_newsletter)), t.emphasis_style()),
                Span::styled("Subscribe to the newsletter", t.text_style()),
                Span::styled(
                    format!("  ({})", keymap.get_key_display_for_action(Action::ToggleNewsletter)),
                    t.muted_style(),
                ),
            ]),
        ];
        frame.render_widget(Paragraph::new(toggles), chunks[3]);

        let hints = keymap.hints(&[
            (Action::Confirm, "Continue"),
            (Action::Skip, "Skip"),
            (Action::Cancel, "Back"),
        ]);
        frame.render_widget(
            Paragraph::new(hint_line(&hints)).alignment(Alignment::Center),
            chunks[4],
        );
    }
}

pub struct OtpScreen;

impl OtpScreen {
    pub fn render(frame: &mut Frame, area: Rect, otp: &OtpState, contact: &str, keymap: &Keymap, now: Instant) {
        let t = theme();
        let card = center_fixed(area, CARD_WIDTH, 14);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(" Verify ")
            .title_style(t.title_style())
            .title_alignment(Alignment::Center);
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(vec![
                Line::styled(format!("Enter the {OTP_LENGTH}-digit code sent to"), t.muted_style()),
                Line::styled(contact.to_string(), t.emphasis_style()),
            ])
            .alignment(Alignment::Center),
            chunks[0],
        );

        render_digit_boxes(frame, chunks[1], otp);

        let status = if otp.is_verifying() {
            Line::styled("Verifying…", t.warning_style())
        } else if let Some(error) = otp.error {
            Line::styled(error.to_string(), t.error_style())
        } else {
            Line::default()
        };
        frame.render_widget(Paragraph::new(status).alignment(Alignment::Center), chunks[2]);

        let resend = match otp.resend_remaining(now) {
            Some(left) => Line::styled(format!("Resend code in {}s", left.as_secs() + 1), t.muted_style()),
            None => hint_line(&keymap.hints(&[(Action::Resend, "Resend code")])),
        };
        frame.render_widget(Paragraph::new(resend).alignment(Alignment::Center), chunks[3]);

        let hints = keymap.hints(&[(Action::Confirm, "Verify"), (Action::Cancel, "Back")]);
        frame.render_widget(
            Paragraph::new(hint_line(&hints)).alignment(Alignment::Center),
            chunks[4],
        );
    }
}

fn render_digit_boxes(frame: &mut Frame, area: Rect, otp: &OtpState) {
    let t = theme();
    let width = OTP_LENGTH as u16 * 5;
    let row = center_fixed(area, width, 3);
    let boxes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Length(5); OTP_LENGTH])
        .split(row);

    let digits: Vec<char> = otp.code.text().chars().collect();
    for (i, slot) in boxes.iter().enumerate() {
        let active = i == digits.len() && !otp.is_verifying();
        let border = if otp.error.is_some() {
            t.error_style()
        } else if active {
            t.border_focused_style()
        } else {
            t.border_style()
        };
        let digit = digits.get(i).map(char::to_string).unwrap_or_default();
        frame.render_widget(
            Paragraph::new(digit)
                .style(t.text_style().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(border)),
            *slot,
        );
    }
}
