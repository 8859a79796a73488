/*!
 * Tests for the translation pipeline
 */

use babelbot::pipeline::DEFAULT_LANG;

use crate::common::{
    detecting_pipeline, failing_pipeline, undetectable_pipeline, uppercasing_pipeline,
};

#[tokio::test]
async fn test_resolveTargetLang_withNothingSet_shouldFallBackToGlobalDefault() {
    let (pipeline, _, _) = detecting_pipeline("en");

    let lang = pipeline.resolve_target_lang("user", "channel").await.unwrap();
    assert_eq!(lang, DEFAULT_LANG);
    assert_eq!(lang, "en");
}

#[tokio::test]
async fn test_resolveTargetLang_withChannelDefaultOnly_shouldUseChannelDefault() {
    let (pipeline, _, repo) = detecting_pipeline("en");
    repo.add_translation_channel("channel", "fr").await.unwrap();

    let lang = pipeline.resolve_target_lang("user", "channel").await.unwrap();
    assert_eq!(lang, "fr");
}

#[tokio::test]
async fn test_resolveTargetLang_withUserAndChannel_userPreferenceShouldWin() {
    let (pipeline, _, repo) = detecting_pipeline("en");
    repo.add_translation_channel("channel", "fr").await.unwrap();
    repo.set_user_lang("user", "de").await.unwrap();

    let lang = pipeline.resolve_target_lang("user", "channel").await.unwrap();
    assert_eq!(lang, "de");
}

#[tokio::test]
async fn test_handleMessage_whenDetectedEqualsTarget_shouldPassthroughWithoutTranslating() {
    let (pipeline, mock, repo) = detecting_pipeline("fr");
    repo.set_user_lang("user", "fr").await.unwrap();

    let reply = pipeline
        .handle_message("user", "channel", "Bonjour <@42>")
        .await
        .unwrap();

    assert_eq!(reply, "Bonjour <@42>");
    assert_eq!(mock.translate_call_count(), 0);
}

#[tokio::test]
async fn test_handleMessage_whenDetectionFails_shouldPassthrough() {
    let (pipeline, mock, _) = undetectable_pipeline();

    let reply = pipeline
        .handle_message("user", "channel", "mystery text")
        .await
        .unwrap();

    assert_eq!(reply, "mystery text");
    assert_eq!(mock.translate_call_count(), 0);
}

#[tokio::test]
async fn test_handleMessage_whenLanguagesDiffer_shouldTranslate() {
    let (pipeline, mock, repo) = detecting_pipeline("en");
    repo.set_user_lang("user", "fr").await.unwrap();

    let reply = pipeline
        .handle_message("user", "channel", "hello world")
        .await
        .unwrap();

    assert_eq!(reply, "[fr] hello world");
    assert_eq!(mock.translate_call_count(), 1);
}

#[tokio::test]
async fn test_handleMessage_shouldRestoreMentionsAfterTranslation() {
    let (pipeline, _, repo) = detecting_pipeline("en");
    repo.set_user_lang("user", "fr").await.unwrap();

    let reply = pipeline
        .handle_message("user", "channel", "hi <@12345> and <@!67890>")
        .await
        .unwrap();

    // Tagged mock echoes the guarded text; mentions must come back intact
    assert!(reply.contains("<@12345>"));
    assert!(reply.contains("<@!67890>"));
    assert!(!reply.contains("[[[MENTION"));
}

#[tokio::test]
async fn test_handleMessage_withRecasingProvider_shouldStillRestoreMentions() {
    // Uppercase mock re-cases the placeholder tokens like real providers do
    let (pipeline, _, repo) = uppercasing_pipeline("en");
    repo.set_user_lang("user", "fr").await.unwrap();

    let reply = pipeline
        .handle_message("user", "channel", "hi <@42>")
        .await
        .unwrap();

    assert_eq!(reply, "HI <@42>");
}

#[tokio::test]
async fn test_handleMessage_whenTranslateFails_shouldSurfaceErrorInReply() {
    let (pipeline, _, repo) = failing_pipeline("en");
    repo.set_user_lang("user", "fr").await.unwrap();

    let reply = pipeline
        .handle_message("user", "channel", "hello")
        .await
        .unwrap();

    assert!(reply.starts_with("[Translation error:"));
    assert!(reply.contains("mock provider is down"));
}

#[tokio::test]
async fn test_handleMessage_withRegionalVariants_shouldTreatThemAsDistinct() {
    // zh-cn source with zh-tw target must translate, never unify
    let (pipeline, mock, repo) = detecting_pipeline("zh-cn");
    repo.set_user_lang("user", "zh-tw").await.unwrap();

    pipeline.handle_message("user", "channel", "你好").await.unwrap();

    assert_eq!(mock.translate_call_count(), 1);
}

#[tokio::test]
async fn test_handleMessage_shouldUseChannelDefaultForUnknownAuthor() {
    let (pipeline, mock, repo) = detecting_pipeline("en");
    repo.add_translation_channel("channel", "es").await.unwrap();

    let reply = pipeline
        .handle_message("stranger", "channel", "good morning")
        .await
        .unwrap();

    assert_eq!(reply, "[es] good morning");
    assert_eq!(mock.translate_call_count(), 1);
}
