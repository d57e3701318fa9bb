#![allow(clippy::unwrap_used)]
//! First-login wizard walked through the view services.

mod common;

use std::sync::Arc;

use common::{FakeBackend, context};
use webspaces_core::services::{
    DomainService, PowerService, SessionService, SetupService, StatusService, append_domain,
};
use webspaces_core::{Router, ViewEffect, ViewId, WizardProgress, WizardStep, default_routes};
use webspaces_gateway::{OsChoice, PowerAction};

fn view_after(router: &Router, effect: &ViewEffect<()>) -> ViewId {
    match effect {
        ViewEffect::Redirect(path) => router.resolve(path).view,
        other => panic!("expected redirect, got {other:?}"),
    }
}

#[tokio::test]
async fn first_login_walks_the_whole_wizard() {
    let backend = Arc::new(FakeBackend {
        first_login: true,
        ..FakeBackend::default()
    });
    let ctx = context(&backend);
    let router = Router::new(default_routes()).unwrap();
    let mut progress = WizardProgress::default();

    let effect = SessionService::new(ctx.clone()).login("a@b.com", "pw").await;
    assert_eq!(view_after(&router, &effect), ViewId::Welcome);

    // Welcome → ChooseOS 不需要后端
    let step = WizardStep::Welcome.next().unwrap();
    assert!(!WizardStep::Welcome.requires_backend());
    assert_eq!(router.resolve(step.path()).view, ViewId::ChooseOs);

    let setup = SetupService::new(ctx.clone());
    let effect = setup.choose_os(OsChoice::Debian).await;
    assert_eq!(view_after(&router, &effect), ViewId::CreateRoot);
    progress.record_os(OsChoice::Debian);

    // 后退不发请求，进度仍保留已接受的选择
    let posts_before = backend.post_count();
    let back = WizardStep::CreateRootPassword.previous().unwrap();
    assert_eq!(router.resolve(back.path()).view, ViewId::ChooseOs);
    assert_eq!(backend.post_count(), posts_before);
    assert_eq!(progress.os, Some(OsChoice::Debian));

    let effect = setup.set_root_password("pw", "other", "").await;
    assert_eq!(effect, ViewEffect::Alert("Passwords do not match".into()));
    assert_eq!(backend.post_count(), posts_before);

    let effect = setup.set_root_password("pw", "pw", "").await;
    assert_eq!(view_after(&router, &effect), ViewId::Congrats);
    progress.record_root_password();
    assert!(progress.is_complete());

    let finish = WizardStep::Congratulations.next().unwrap();
    assert_eq!(router.resolve(finish.path()).view, ViewId::Dashboard);

    let status = StatusService::new(ctx).fetch().await;
    assert!(matches!(status, ViewEffect::Update(s) if s.os.as_deref() == Some("Debian")));
}

#[tokio::test]
async fn returning_member_skips_the_wizard() {
    let backend = Arc::new(FakeBackend::default());
    let router = Router::new(default_routes()).unwrap();

    let effect = SessionService::new(context(&backend))
        .login("a@b.com", "pw")
        .await;
    assert_eq!(view_after(&router, &effect), ViewId::Dashboard);
}

#[tokio::test]
async fn rejected_login_stays_put() {
    let backend = Arc::new(FakeBackend::default());
    let effect = SessionService::new(context(&backend))
        .login("a@b.com", "wrong")
        .await;
    assert!(matches!(effect, ViewEffect::Alert(_)));
}

#[tokio::test]
async fn added_domain_is_appended_once() {
    let backend = Arc::new(FakeBackend::default());
    let service = DomainService::new(context(&backend));
    let mut shown = Vec::new();

    if let ViewEffect::Update(domain) = service.add("example.com").await {
        assert!(append_domain(&mut shown, domain.clone()));
        assert!(!append_domain(&mut shown, domain));
    }
    assert_eq!(shown, vec!["example.com".to_string()]);
    assert_eq!(backend.post_count(), 1);
}

#[tokio::test]
async fn bound_domain_can_be_removed_once() {
    let backend = Arc::new(FakeBackend::default());
    let service = DomainService::new(context(&backend));

    assert!(matches!(service.add("example.com").await, ViewEffect::Update(_)));
    assert_eq!(
        service.remove("example.com").await,
        ViewEffect::Update("example.com".into())
    );
    assert!(matches!(
        service.remove("example.com").await,
        ViewEffect::Alert(_)
    ));
    assert_eq!(backend.post_count(), 3);
}

#[tokio::test]
async fn power_cycle_then_delete_restarts_the_wizard() {
    let backend = Arc::new(FakeBackend::default());
    if let Ok(mut os) = backend.os.lock() {
        *os = Some(OsChoice::Alpine.id());
    }
    let ctx = context(&backend);
    let power = PowerService::new(ctx.clone());
    let status = StatusService::new(ctx);
    let router = Router::new(default_routes()).unwrap();

    assert!(matches!(
        power.apply(PowerAction::Shutdown).await,
        ViewEffect::Alert(_)
    ));
    assert_eq!(
        power.apply(PowerAction::Boot).await,
        ViewEffect::Update(PowerAction::Boot)
    );
    assert!(matches!(status.fetch().await, ViewEffect::Update(s) if s.running));

    let effect = power.delete().await;
    assert_eq!(view_after(&router, &effect), ViewId::Welcome);
    assert!(matches!(
        status.fetch().await,
        ViewEffect::Update(s) if !s.running && s.os.is_none()
    ));
}
