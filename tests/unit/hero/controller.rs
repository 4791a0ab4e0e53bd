use super::*;
use crate::animation::ease::Ease;
use crate::playlist::asset::{Playlist, VideoAsset};
use crate::transition::animator::TransitionConfig;

fn config(n: u32) -> HeroConfig {
    HeroConfig {
        playlist: Playlist::new(
            (1..=n)
                .map(|i| VideoAsset::new(i, format!("v{i}.mp4"), format!("p{i}.jpg")))
                .collect(),
        )
        .unwrap(),
        transition: TransitionConfig {
            ease: Ease::Linear,
            ..TransitionConfig::default()
        },
        ..HeroConfig::default()
    }
}

fn hero(n: u32) -> Hero {
    Hero::new(config(n), Size::new(1280.0, 720.0)).unwrap()
}

fn run_transition(h: &mut Hero) {
    for _ in 0..70 {
        h.tick(Duration::from_millis(16));
    }
}

#[test]
fn rejects_degenerate_viewport() {
    assert!(Hero::new(config(2), Size::new(0.0, 720.0)).is_err());
    let mut h = hero(2);
    assert!(h.set_viewport(Size::new(f64::NAN, 1.0)).is_err());
    assert!(h.set_viewport(Size::new(800.0, 600.0)).is_ok());
    assert_eq!(h.viewport(), Size::new(800.0, 600.0));
}

#[test]
fn initial_view_shows_loader_and_hides_secondary() {
    let h = hero(3);
    let v = h.view();
    assert_eq!(v.main.source, "v1.mp4");
    assert_eq!(v.main.poster, "p1.jpg");
    assert_eq!(v.next_source, "v2.mp4");
    assert!(v.show_loader);
    assert!(!v.show_retry);
    assert!(!v.secondary_ready);
    assert!(!v.preview_enabled);
    assert_eq!(v.transition, TransitionState::Idle);
    assert!(!v.overlay.visible);
    assert_eq!(v.frame.clip_path, "polygon(0% 0%, 100% 0%, 100% 100%, 0% 100%)");
}

#[test]
fn click_before_hover_is_ignored() {
    let mut h = hero(3);
    assert!(!h.preview_clicked());
    assert_eq!(h.transition_state(), TransitionState::Idle);
    assert!(h.drain_events().is_empty());
}

#[test]
fn hover_fetches_secondary_exactly_once() {
    let mut h = hero(3);
    h.pointer_entered_preview();
    h.pointer_entered_preview();
    h.pointer_entered_preview();
    assert_eq!(
        h.drain_events(),
        vec![HeroEvent::FetchSecondary { next: VideoId(2) }]
    );
    assert!(h.view().preview_enabled);
}

#[test]
fn three_clip_scenario_cycles_through_playlist() {
    let mut h = hero(3);
    h.pointer_entered_preview();
    h.drain_events();

    assert!(h.preview_clicked());
    run_transition(&mut h);
    assert_eq!(h.playlist().current().id, VideoId(2));
    assert_eq!(h.playlist().next().id, VideoId(3));

    assert!(h.preview_clicked());
    run_transition(&mut h);
    assert_eq!(h.playlist().current().id, VideoId(3));
    assert_eq!(h.playlist().next().id, VideoId(1));

    assert_eq!(
        h.drain_events(),
        vec![
            HeroEvent::OverlayStarted { asset: VideoId(2) },
            HeroEvent::Advanced {
                from: VideoId(1),
                to: VideoId(2)
            },
            HeroEvent::OverlayStarted { asset: VideoId(3) },
            HeroEvent::Advanced {
                from: VideoId(2),
                to: VideoId(3)
            },
        ]
    );
}

#[test]
fn rapid_clicks_advance_once() {
    let mut h = hero(4);
    h.pointer_entered_preview();
    assert!(h.preview_clicked());
    assert!(!h.preview_clicked());
    h.tick(Duration::from_millis(300));
    assert!(!h.preview_clicked());
    run_transition(&mut h);
    assert_eq!(h.playlist().advances(), 1);
    assert_eq!(h.playlist().current().id, VideoId(2));
}

#[test]
fn single_clip_transition_still_advances_once() {
    let mut h = hero(1);
    h.main_media_loaded();
    h.pointer_entered_preview();
    assert!(h.preview_clicked());
    run_transition(&mut h);
    assert_eq!(h.playlist().advances(), 1);
    assert_eq!(h.playlist().current().id, VideoId(1));
    assert!(!h.view().show_loader);
}

#[test]
fn overlay_is_visible_only_while_animating() {
    let mut h = hero(2);
    h.pointer_entered_preview();
    h.preview_clicked();
    h.tick(Duration::from_millis(500));
    let mid = h.view();
    assert_eq!(mid.transition, TransitionState::Animating);
    assert!(mid.overlay.visible && mid.overlay.playing);
    assert_eq!(mid.overlay.footprint.scale, 0.75);

    assert_eq!(h.tick(Duration::from_millis(500)), TickOutcome::Completed);
    let done = h.view();
    assert!(!done.overlay.visible);
    assert_eq!(done.overlay.footprint.scale, 0.5);
    assert_eq!(done.main.source, "v2.mp4");
}

#[test]
fn load_reports_do_not_touch_transition_state() {
    let mut h = hero(2);
    h.pointer_entered_preview();
    h.main_media_loaded();
    assert_eq!(h.transition_state(), TransitionState::Idle);
    h.preview_clicked();
    h.main_media_loaded();
    h.main_media_failed("network");
    assert_eq!(h.transition_state(), TransitionState::Animating);
}

#[test]
fn main_loader_returns_for_each_new_clip() {
    let mut h = hero(2);
    h.main_media_loaded();
    assert!(!h.view().show_loader);
    h.pointer_entered_preview();
    h.preview_clicked();
    run_transition(&mut h);
    assert!(h.view().show_loader);
    assert!(!h.main_media_loaded_for(VideoId(1)));
    assert!(h.view().show_loader);
    assert!(h.main_media_loaded_for(VideoId(2)));
    assert!(!h.view().show_loader);
}

#[test]
fn failure_surfaces_retry_affordance() {
    let mut h = hero(2);
    h.main_media_failed("decode error");
    let v = h.view();
    assert!(!v.show_loader);
    assert!(v.show_retry);
    assert!(h.retry_main_media());
    assert!(h.view().show_loader);
    assert!(!h.retry_main_media());
}

#[test]
fn scroll_updates_drive_the_frame_shape() {
    let mut h = hero(2);
    h.set_scroll_progress(1.0);
    assert_eq!(h.view().frame.border_radius, "0% 0% 40% 10%");
    h.scroll_to(&ScrollLayout {
        element_top: 0.0,
        element_height: 720.0,
        viewport_height: 720.0,
        scroll_y: 0.0,
    });
    assert_eq!(h.view().frame.border_radius, "0% 0% 0% 0%");
}

#[test]
fn dropping_mid_transition_is_clean() {
    let mut h = hero(3);
    h.pointer_entered_preview();
    h.preview_clicked();
    h.tick(Duration::from_millis(100));
    let snapshot = h.clone();
    drop(h);
    assert_eq!(snapshot.playlist().advances(), 0);
}
