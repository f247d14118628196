use super::*;
use agrolens_core::{
    config::MatchPolicy,
    devices::mock::{MockMicrophone, MockSpeaker},
    error::AgroError,
    language,
    message::Sender,
    traits::Assistant,
};
use std::sync::Arc;
use std::time::Duration;

const MONSOON_EN: &str = "In monsoon, crops like rice, maize, and soybean are commonly grown.";
const HI_FALLBACK: &str =
    "माफ़ कीजिए, मैं अभी सीख रहा हूँ। कृपया खेती या फसल से जुड़ा प्रश्न पूछें!";

fn responder() -> KeywordResponder {
    KeywordResponder::builtin(MatchPolicy::Longest)
}

// --- Keyword responder ---

#[test]
fn test_monsoon_english() {
    assert_eq!(
        responder().respond("tell me about monsoon crops", "en"),
        MONSOON_EN
    );
}

#[test]
fn test_unrecognized_hindi() {
    assert_eq!(responder().respond("xyz nonsense", "hi"), HI_FALLBACK);
}

#[test]
fn test_unrecognized_english_uses_hardcoded_message() {
    assert_eq!(
        responder().respond("xyz nonsense", "en"),
        "Sorry, I am still learning. Please ask about farming, crops, or pesticides!"
    );
    // No configured fallback for Kannada either.
    assert_eq!(
        responder().respond("xyz", "kn"),
        responder().respond("xyz", "en")
    );
}

#[test]
fn test_matching_is_case_insensitive() {
    assert_eq!(
        responder().respond("What are MONSOON Crops?", "en"),
        MONSOON_EN
    );
}

#[test]
fn test_matching_is_plain_containment() {
    // Trigger found inside a larger word run.
    assert_eq!(
        responder().matched_trigger("xweed controlx"),
        Some("weed control")
    );
}

#[test]
fn test_reply_in_requested_language() {
    let r = responder();
    assert_eq!(
        r.respond("best fertilizer?", "mr"),
        "माती तपासून NPK खत वापरा. सेंद्रिय खतसुद्धा उपयुक्त आहे."
    );
    assert_eq!(
        r.respond("best fertilizer?", "te"),
        "మట్టిలో పోషకాలు తెలుసుకొని NPK ఎరువులు వాడండి. జీవ ఎరువులు కూడా మంచివి."
    );
}

#[test]
fn test_reply_falls_back_to_english() {
    // No Urdu replies are configured.
    assert_eq!(responder().respond("monsoon crops", "ur"), MONSOON_EN);
}

#[test]
fn test_telugu_trigger() {
    let r = responder();
    assert_eq!(r.respond("మాన్సూన్ పంటలు ఏమిటి", "en"), MONSOON_EN);
    assert_eq!(r.matched_trigger("కలుపు నియంత్రణ"), Some("కలుపు నియంత్రణ"));
}

#[test]
fn test_builtin_table_shape() {
    let r = responder();
    assert_eq!(r.phrases().count(), 30);
    assert_eq!(r.policy(), MatchPolicy::Longest);
    for phrase in r.phrases() {
        assert_eq!(phrase, phrase.to_lowercase());
    }
}

fn overlapping(policy: MatchPolicy) -> KeywordResponder {
    KeywordResponder::from_tables(
        "en",
        policy,
        vec![
            ("crops", vec![("en", "general")]),
            ("monsoon crops", vec![("en", "monsoon"), ("hi", "मानसून")]),
        ],
        vec![("hi", "समझ नहीं आया")],
    )
    .unwrap()
}

#[test]
fn test_first_match_policy_uses_table_order() {
    let r = overlapping(MatchPolicy::First);
    assert_eq!(r.respond("monsoon crops please", "en"), "general");
}

#[test]
fn test_longest_match_policy_prefers_specific_trigger() {
    let r = overlapping(MatchPolicy::Longest);
    assert_eq!(r.respond("monsoon crops please", "en"), "monsoon");
    assert_eq!(r.respond("monsoon crops please", "hi"), "मानसून");
    assert_eq!(r.respond("any crops", "hi"), "general");
    assert_eq!(r.respond("nothing", "hi"), "समझ नहीं आया");
}

#[test]
fn test_longest_match_tie_goes_to_table_order() {
    let r = KeywordResponder::from_tables(
        "en",
        MatchPolicy::Longest,
        vec![("rice", vec![("en", "a")]), ("corn", vec![("en", "b")])],
        vec![],
    )
    .unwrap();
    assert_eq!(r.respond("corn and rice", "en"), "a");
}

#[test]
fn test_from_tables_requires_default_reply() {
    let err = KeywordResponder::from_tables(
        "en",
        MatchPolicy::First,
        vec![("wheat", vec![("hi", "गेहूं")])],
        vec![],
    )
    .err()
    .unwrap();
    assert!(matches!(err, AgroError::Config(_)));
}

#[tokio::test]
async fn test_assistant_trait_reply() {
    let r = responder();
    assert_eq!(r.name(), "keywords");
    assert_eq!(r.reply("monsoon crops", "en").await.unwrap(), MONSOON_EN);
}

// --- Voice chat ---

fn lang(code: &str) -> &'static language::Language {
    language::find(code).unwrap()
}

#[tokio::test]
async fn test_listen_once_logs_and_speaks() {
    let mic = Arc::new(MockMicrophone::new(["tell me about monsoon crops"]));
    let speaker = Arc::new(MockSpeaker::new());
    let chat = VoiceChat::new(Arc::new(responder()), mic.clone(), speaker.clone());

    let reply = chat.listen_once(lang("en")).await.unwrap();
    assert_eq!(reply.as_deref(), Some(MONSOON_EN));

    let log = chat.messages();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].sender, Sender::User);
    assert_eq!(log[0].text, "tell me about monsoon crops");
    assert_eq!(log[1].sender, Sender::Bot);
    assert_eq!(log[1].text, MONSOON_EN);

    assert_eq!(mic.locales(), vec!["en-IN".to_string()]);
    assert!(!mic.is_active());
    assert_eq!(
        speaker.spoken(),
        vec![(MONSOON_EN.to_string(), "en-IN".to_string())]
    );
}

#[tokio::test]
async fn test_listen_uses_language_locale() {
    let mic = Arc::new(MockMicrophone::new(["xyz nonsense"]));
    let speaker = Arc::new(MockSpeaker::new());
    let chat = VoiceChat::new(Arc::new(responder()), mic.clone(), speaker.clone());

    let reply = chat.listen_once(lang("hi")).await.unwrap();
    assert_eq!(reply.as_deref(), Some(HI_FALLBACK));
    assert_eq!(mic.locales(), vec!["hi-IN".to_string()]);
    assert_eq!(speaker.spoken()[0].1, "hi-IN");
}

#[tokio::test]
async fn test_empty_transcript_is_ignored() {
    let mic = Arc::new(MockMicrophone::new(["   "]));
    let speaker = Arc::new(MockSpeaker::new());
    let chat = VoiceChat::new(Arc::new(responder()), mic, speaker.clone());

    assert_eq!(chat.listen_once(lang("en")).await.unwrap(), None);
    assert!(chat.messages().is_empty());
    assert!(speaker.spoken().is_empty());
}

#[tokio::test]
async fn test_denied_microphone_surfaces_error() {
    let chat = VoiceChat::new(
        Arc::new(responder()),
        Arc::new(MockMicrophone::denied()),
        Arc::new(MockSpeaker::new()),
    );
    let err = chat.listen_once(lang("en")).await.unwrap_err();
    assert!(matches!(err, AgroError::Device(_)));
    assert!(!chat.is_listening());
    assert!(chat.messages().is_empty());
}

#[tokio::test]
async fn test_second_concurrent_listen_is_refused() {
    let mic = Arc::new(
        MockMicrophone::new(["weed control", "crop rotation"])
            .with_latency(Duration::from_millis(100)),
    );
    let chat = Arc::new(VoiceChat::new(
        Arc::new(responder()),
        mic.clone(),
        Arc::new(MockSpeaker::new()),
    ));

    let first = {
        let chat = chat.clone();
        tokio::spawn(async move { chat.listen_once(lang("en")).await })
    };
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(chat.is_listening());

    let err = chat.listen_once(lang("en")).await.unwrap_err();
    assert!(matches!(err, AgroError::Device(_)));

    let reply = first.await.unwrap().unwrap();
    assert_eq!(
        reply.as_deref(),
        Some("Weeds can be controlled with mulching, hand weeding, or herbicides.")
    );
    assert!(!chat.is_listening());
    assert_eq!(mic.locales().len(), 1);
}

#[tokio::test]
async fn test_speaking_cancels_previous_utterance() {
    let speaker = Arc::new(MockSpeaker::new());
    let chat = VoiceChat::new(
        Arc::new(responder()),
        Arc::new(MockMicrophone::new(Vec::<String>::new())),
        speaker.clone(),
    );

    chat.ask("monsoon crops", lang("en")).await.unwrap();
    chat.ask("winter crops", lang("en")).await.unwrap();

    assert_eq!(speaker.cancel_count(), 2);
    assert_eq!(speaker.overlap_count(), 0);
    assert_eq!(
        speaker.current().as_deref(),
        Some("Winter (Rabi) crops include wheat, barley, mustard, and peas.")
    );
    assert_eq!(chat.messages().len(), 4);
}

#[tokio::test]
async fn test_reset_clears_log_and_silences() {
    let speaker = Arc::new(MockSpeaker::new());
    let chat = VoiceChat::new(
        Arc::new(responder()),
        Arc::new(MockMicrophone::new(Vec::<String>::new())),
        speaker.clone(),
    );
    chat.ask("soil testing", lang("te")).await.unwrap();
    chat.reset();
    assert!(chat.messages().is_empty());
    assert!(speaker.current().is_none());
}

#[test]
fn test_greeting_per_language() {
    assert_eq!(keywords::greeting("en"), "Hello! How can I help you?");
    assert_eq!(keywords::greeting("te"), "హలో! నేను మీకు ఎలా సహాయపడగలను?");
    // No Urdu greeting: English.
    assert_eq!(keywords::greeting("ur"), "Hello! How can I help you?");
}

#[tokio::test]
async fn test_greet_restarts_log_and_speaks() {
    let mic = Arc::new(MockMicrophone::new(["crop rotation"]));
    let speaker = Arc::new(MockSpeaker::new());
    let chat = VoiceChat::new(Arc::new(responder()), mic, speaker.clone());

    chat.listen_once(lang("en")).await.unwrap();
    assert_eq!(chat.messages().len(), 2);

    let text = chat.greet(lang("mr"));
    assert_eq!(text, "नमस्कार! मी तुम्हाला कशाप्रकारे मदत करू शकतो?");
    let log = chat.messages();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].sender, Sender::Bot);
    assert_eq!(log[0].text, text);
    assert_eq!(
        speaker.spoken().last(),
        Some(&(text.to_string(), "mr-IN".to_string()))
    );
    assert_eq!(speaker.overlap_count(), 0);
}
