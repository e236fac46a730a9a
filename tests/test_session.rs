//! Integration tests for the signed-in session: auth gate, search and the
//! media picker flow.

mod common;

use shoreline::{
    Config,
    core::{IdentityService, request_images},
};

use common::*;

#[tokio::test]
async fn test_events_rejected_while_signed_out() -> anyhow::Result<()> {
    let mut session = Session::from_config(test_identity(), &Config::default());
    assert!(!session.is_authenticated());

    let err = session.dispatch(WizardEvent::StartProject).unwrap_err();
    assert!(matches!(err, WizardError::Unauthenticated));
    assert_eq!(session.wizard().step(), WizardStep::Home);
    Ok(())
}

#[tokio::test]
async fn test_search_after_commit() -> anyhow::Result<()> {
    let mut session = signed_in_session().await?;
    assert_eq!(session.visible_projects().len(), 3);

    session.dispatch(WizardEvent::StartProject)?;
    session.dispatch(WizardEvent::Edit(DraftField::Title("Kelp Forest".to_string())))?;
    session.dispatch(WizardEvent::Edit(DraftField::Location("Norway".to_string())))?;
    session.dispatch(WizardEvent::Next)?;
    session.dispatch(WizardEvent::Submit)?;

    assert_eq!(session.visible_projects()[0].title(), "Kelp Forest");

    session.set_query("norWAY");
    let found = session.visible_projects();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title(), "Kelp Forest");

    session.set_query("brazil");
    assert!(session.visible_projects().is_empty());

    session.set_query("");
    assert_eq!(session.visible_projects().len(), 4);
    Ok(())
}

#[tokio::test]
async fn test_picker_flow_feeds_wizard() -> anyhow::Result<()> {
    let mut session = signed_in_session().await?;
    session.dispatch(WizardEvent::StartProject)?;
    session.dispatch(WizardEvent::Next)?;

    let outcome = request_images(&StubPicker::selecting(&["content://1", "content://2"])).await;
    session.dispatch(WizardEvent::ImagesPicked(outcome))?;

    let outcome = request_images(&StubPicker::cancelled()).await;
    assert_eq!(outcome, PickOutcome::Cancelled);
    session.dispatch(WizardEvent::ImagesPicked(outcome))?;

    let outcome = request_images(&StubPicker::denied()).await;
    assert_eq!(outcome, PickOutcome::Denied);
    let t = session.dispatch(WizardEvent::ImagesPicked(outcome))?;
    assert_eq!(t.notice, Some(Notice::PermissionRequired));

    assert_eq!(session.wizard().selection().map(|s| s.len()), Some(2));
    session.dispatch(WizardEvent::Submit)?;
    assert_eq!(
        session.catalog().projects()[0].images(),
        images(&["content://1", "content://2"]).as_slice()
    );
    Ok(())
}

#[tokio::test]
async fn test_late_picker_result_is_dropped_after_leaving_upload() -> anyhow::Result<()> {
    let mut session = signed_in_session().await?;
    session.dispatch(WizardEvent::StartProject)?;
    session.dispatch(WizardEvent::Next)?;
    assert_eq!(session.wizard().step(), WizardStep::ImageUpload);

    // user backs out while the dialog is still open
    session.dispatch(WizardEvent::Back)?;
    let outcome = request_images(&StubPicker::selecting(&["content://late"])).await;
    assert_eq!(session.deliver_picked(outcome)?, None);
    assert_eq!(session.wizard().step(), WizardStep::ProjectForm);

    session.dispatch(WizardEvent::SwitchTab(Tab::Profile))?;
    let outcome = request_images(&StubPicker::denied()).await;
    assert_eq!(session.deliver_picked(outcome)?, None);
    assert_eq!(session.wizard().step(), WizardStep::Profile);
    assert_eq!(session.catalog().len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_picker_result_applies_on_upload_step() -> anyhow::Result<()> {
    let mut session = signed_in_session().await?;
    session.dispatch(WizardEvent::StartProject)?;
    session.dispatch(WizardEvent::Next)?;

    let outcome = request_images(&StubPicker::selecting(&["content://1"])).await;
    let transition = session.deliver_picked(outcome)?.expect("upload step is showing");
    assert_eq!(transition.step, WizardStep::ImageUpload);
    assert_eq!(session.wizard().selection().map(|s| s.len()), Some(1));
    Ok(())
}

#[tokio::test]
async fn test_sign_out_resets_wizard() -> anyhow::Result<()> {
    let mut session = signed_in_session().await?;
    session.dispatch(WizardEvent::StartProject)?;
    session.set_query("fiji");

    session.sign_out();
    assert!(!session.is_authenticated());
    assert_eq!(session.wizard().step(), WizardStep::Home);
    assert!(session.wizard().draft().is_none());
    assert_eq!(session.query(), "");
    assert_eq!(session.catalog().len(), 3);

    session
        .identity()
        .sign_in(TEST_EMAIL.to_string(), TEST_PASSWORD.to_string())
        .await?;
    assert!(session.dispatch(WizardEvent::StartProject).is_ok());
    Ok(())
}

#[tokio::test]
async fn test_config_controls_seed_and_strictness() -> anyhow::Result<()> {
    let mut config = Config::default();
    config.catalog.seed = false;
    config.wizard.require_complete_draft = true;

    let identity = test_identity();
    identity
        .sign_in(TEST_EMAIL.to_string(), TEST_PASSWORD.to_string())
        .await?;
    let mut session = Session::from_config(identity, &config);
    assert!(session.catalog().is_empty());

    session.dispatch(WizardEvent::StartProject)?;
    let err = session.dispatch(WizardEvent::Next).unwrap_err();
    assert!(matches!(err, WizardError::IncompleteDraft(_)));
    Ok(())
}
