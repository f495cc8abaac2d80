//! End-to-end conversations against an in-memory store.

mod common;

use std::sync::Arc;

use bakerbot_application::{HostPorts, NoCamera, NotificationLevel, OrderDialogueController};
use bakerbot_core::config::BotConfig;
use bakerbot_core::flow::{FlowStep, FlowTable};
use bakerbot_core::session::{ConversationMode, OrderField};
use bakerbot_core::view::InputArea;
use bakerbot_infrastructure::{MemoryStore, SessionPersistence};
use common::{CHOICES, Harness, RecordingLinks};

const GO_BACK: &str = "⬅️ Go back";
const START_OVER: &str = "🔄 Start over";
const PLACE_ORDER: &str = "🛒 Place Custom Order";
const PREVIEW: &str = "📸 Preview in AR";

fn walk_to_name(h: &mut Harness) {
    h.controller.open();
    h.controller.select_quick_reply(PLACE_ORDER);
    for choice in CHOICES {
        let outcome = h.controller.select_quick_reply(choice);
        assert!(outcome.notifications.is_empty(), "rejected {choice}");
    }
}

fn complete_order(h: &mut Harness) -> bakerbot_application::Outcome {
    walk_to_name(h);
    h.controller.submit_text("Priya");
    h.controller.submit_text("98765 43210");
    h.controller.select_quick_reply("📅 Tomorrow")
}

#[test]
fn test_open_greets_once() {
    let mut h = Harness::new();
    let first = h.controller.open();
    assert_eq!(first.assistant_messages.len(), 1);
    assert!(first.assistant_messages[0]
        .quick_replies
        .iter()
        .any(|r| r == PLACE_ORDER));

    let second = h.controller.open();
    assert!(second.is_noop());
    assert_eq!(h.controller.state().messages.len(), 1);
}

#[test]
fn test_full_order_hands_off_with_every_answer() {
    let mut h = Harness::new();
    let outcome = complete_order(&mut h);

    let handoff = outcome.handoff.expect("order should be handed off");
    let state = h.controller.state();
    assert_eq!(state.mode, ConversationMode::Ordering);
    assert_eq!(state.step_index, h.controller.flow().len());
    assert!(state.answers.is_complete());
    assert_eq!(state.answers.get(OrderField::Phone), Some("9876543210"));
    assert_eq!(state.answers.get(OrderField::Name), Some("Priya"));

    let summary = state
        .messages
        .iter()
        .find(|m| m.from_assistant && m.text == handoff.summary)
        .expect("summary should be in the transcript");
    for value in CHOICES.iter().copied().chain(["Priya", "9876543210", "📅 Tomorrow"]) {
        assert!(summary.text.contains(value), "{value} missing from summary");
    }

    let links = h.opened_links();
    assert_eq!(links, vec![handoff.link.clone()]);
    assert!(handoff.link.starts_with("https://wa.me/918015102020?text="));

    let encoded = handoff.link.split("?text=").nth(1).unwrap();
    let decoded = urlencoding::decode(encoded).unwrap();
    for value in CHOICES.iter().copied().chain(["Priya", "9876543210", "📅 Tomorrow"]) {
        assert_eq!(decoded.matches(value).count(), 1, "{value} in {decoded}");
    }

    assert!(outcome
        .notifications
        .iter()
        .any(|n| n.level == NotificationLevel::Info && n.title.contains("WhatsApp")));

    let view = h.controller.view();
    assert!(view.completed);
    assert_eq!(view.progress, None);
    assert_eq!(view.active_quick_replies, vec![PREVIEW, START_OVER, GO_BACK]);
}

#[test]
fn test_prompts_offer_go_back_after_first_answer() {
    let mut h = Harness::new();
    h.controller.open();
    let start = h.controller.select_quick_reply(PLACE_ORDER);
    let first_prompt = start.assistant_messages.last().unwrap();
    assert!(!first_prompt.quick_replies.iter().any(|r| r == GO_BACK));

    let next = h.controller.select_quick_reply(CHOICES[0]);
    let prompt = next.assistant_messages.last().unwrap();
    assert_eq!(prompt.quick_replies.last().map(String::as_str), Some(GO_BACK));
    assert_eq!(h.controller.view().progress, Some((2, 9)));
}

#[test]
fn test_invalid_phone_changes_nothing() {
    let mut h = Harness::new();
    walk_to_name(&mut h);
    h.controller.submit_text("Priya");
    let before = h.controller.state().clone();

    for bad in ["12345", "+91 98765 43210", "5876543210"] {
        let outcome = h.controller.submit_text(bad);
        assert_eq!(outcome.notifications.len(), 1);
        assert_eq!(outcome.notifications[0].level, NotificationLevel::Error);
        assert!(outcome.assistant_messages.is_empty());
        assert_eq!(h.controller.state(), &before);
    }
    assert_eq!(
        h.controller.view().input,
        InputArea::TextEntry {
            placeholder: "Type your answer...".to_string()
        }
    );
}

#[test]
fn test_go_back_restores_previous_step() {
    let mut h = Harness::new();
    walk_to_name(&mut h);
    let before_name = h.controller.state().clone();
    h.controller.submit_text("Priya");

    let outcome = h.controller.select_quick_reply(GO_BACK);
    assert!(outcome.transcript_rewritten);
    assert_eq!(h.controller.state(), &before_name);
    assert_eq!(h.controller.state().answers.get(OrderField::Name), None);
}

#[test]
fn test_go_back_after_completion_reopens_last_step() {
    let mut h = Harness::new();
    complete_order(&mut h);
    h.controller.go_back();

    let state = h.controller.state();
    assert_eq!(state.step_index, h.controller.flow().len() - 1);
    assert_eq!(state.answers.get(OrderField::DeliveryDate), None);
    assert!(!h.controller.view().completed);
    assert!(state.last_assistant().unwrap().text.contains("delivered"));
}

#[test]
fn test_go_back_with_empty_history_is_noop() {
    let mut h = Harness::new();
    h.controller.open();
    assert!(h.controller.go_back().is_noop());

    h.controller.select_quick_reply(PLACE_ORDER);
    let before = h.controller.state().clone();
    assert!(h.controller.go_back().is_noop());
    assert_eq!(h.controller.state(), &before);
}

#[test]
fn test_restart_clears_and_greets() {
    let mut h = Harness::new();
    walk_to_name(&mut h);
    let session_id = h.controller.state().session_id.clone();

    let outcome = h.controller.select_quick_reply(START_OVER);
    assert!(outcome.transcript_rewritten);

    let state = h.controller.state();
    assert_eq!(state.mode, ConversationMode::Browsing);
    assert_eq!(state.step_index, 0);
    assert!(state.answers.is_empty());
    assert!(state.history.is_empty());
    assert_eq!(state.messages.len(), 1);
    assert!(state.messages[0].from_assistant);
    assert_eq!(state.session_id, session_id);
}

#[test]
fn test_browsing_answers_questions_without_touching_the_order() {
    let mut h = Harness::new();
    h.controller.open();

    for question in ["Can I see the menu?", "how do I contact you", "hello", "blah"] {
        let outcome = h.controller.submit_text(question);
        assert_eq!(outcome.assistant_messages.len(), 1, "{question}");
        assert_eq!(h.controller.state().mode, ConversationMode::Browsing);
        assert!(h.controller.state().answers.is_empty());
        assert!(h.controller.state().history.is_empty());
    }
}

#[test]
fn test_order_intent_in_free_text_starts_flow() {
    let mut h = Harness::new();
    h.controller.open();
    h.controller.submit_text("I want to order a cake");
    assert_eq!(h.controller.state().mode, ConversationMode::Ordering);
    assert_eq!(h.controller.state().step_index, 0);
}

#[test]
fn test_start_order_ignored_mid_flow() {
    let mut h = Harness::new();
    walk_to_name(&mut h);
    let before = h.controller.state().clone();
    assert!(h.controller.select_quick_reply(PLACE_ORDER).is_noop());
    assert_eq!(h.controller.state(), &before);
}

#[test]
fn test_empty_input_ignored() {
    let mut h = Harness::new();
    h.controller.open();
    let before = h.controller.state().clone();
    assert!(h.controller.submit_text("   ").is_noop());
    assert_eq!(h.controller.state(), &before);
}

#[test]
fn test_preview_needs_answers_then_launches() {
    let mut h = Harness::new();
    h.controller.open();
    let early = h.controller.select_quick_reply(PREVIEW);
    assert_eq!(early.notifications[0].title, "Nothing to preview yet");

    complete_order(&mut h);
    let outcome = h.controller.select_quick_reply(PREVIEW);
    assert_eq!(outcome.notifications[0].level, NotificationLevel::Info);
    let launched = h.preview.launched.lock().unwrap();
    assert_eq!(launched.len(), 1);
    assert_eq!(launched[0].flavor, "🍫 Chocolate");
}

#[test]
fn test_preview_without_camera_reports_error() {
    let store = Arc::new(MemoryStore::new());
    let config = BotConfig::default();
    let persistence = SessionPersistence::new(store, config.storage.clone());
    let ports = HostPorts {
        links: Arc::new(RecordingLinks::default()),
        preview: Arc::new(NoCamera),
    };
    let mut controller = OrderDialogueController::new(config, persistence, ports);
    controller.open();
    controller.select_quick_reply(PLACE_ORDER);
    for choice in CHOICES {
        controller.select_quick_reply(choice);
    }

    let before = controller.state().clone();
    let outcome = controller.select_quick_reply(PREVIEW);
    assert_eq!(outcome.notifications.len(), 1);
    assert_eq!(outcome.notifications[0].level, NotificationLevel::Error);
    assert_eq!(outcome.notifications[0].title, "Camera Error 📷");
    assert_eq!(controller.state(), &before);
}

#[test]
fn test_info_step_advances_without_recording() {
    let flow = FlowTable::new(vec![
        FlowStep::info("welcome", "Custom orders need 24-48 hours notice.", &["👍 Got it"]),
        FlowStep::free_text("name", "What's your name?", OrderField::Name),
    ]);
    let store = Arc::new(MemoryStore::new());
    let config = BotConfig::default();
    let persistence = SessionPersistence::new(store, config.storage.clone());
    let ports = HostPorts {
        links: Arc::new(RecordingLinks::default()),
        preview: Arc::new(NoCamera),
    };
    let mut controller = OrderDialogueController::with_flow(config, flow, persistence, ports);
    controller.open();
    controller.select_quick_reply(PLACE_ORDER);
    controller.select_quick_reply("👍 Got it");

    assert_eq!(controller.state().step_index, 1);
    assert!(controller.state().answers.is_empty());
    assert_eq!(controller.state().history.len(), 1);
}
