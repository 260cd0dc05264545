mod common;

use std::sync::Arc;

use common::{FakeApi, sample_song};
use givemeasong::{
    errors::{FetchError, ResolutionError},
    management::{SongWorkflow, WorkflowState},
    types::SongId,
};

const LINK: &str = "https://open.spotify.com/track/abc";

#[tokio::test]
async fn test_starts_idle() {
    let workflow = SongWorkflow::new(FakeApi::default());
    let state = workflow.state();

    assert_eq!(state, WorkflowState::Idle);
    assert!(state.song().is_none());
    assert!(state.error().is_none());
    assert!(!state.is_loading());
}

#[tokio::test]
async fn test_submit_then_mount_reaches_ready() {
    let api = FakeApi::default()
        .with_resolution(LINK, Ok(SongId::from("xyz")))
        .with_song("xyz", Ok(sample_song()));
    let workflow = SongWorkflow::new(api.clone());

    let id = workflow.submit(LINK).await;
    assert_eq!(id, Some(SongId::from("xyz")));
    assert_eq!(
        workflow.state(),
        WorkflowState::Resolved {
            id: SongId::from("xyz")
        }
    );

    workflow.mount(SongId::from("xyz")).await;
    let state = workflow.state();
    assert_eq!(state.song(), Some(&sample_song()));
    assert!(state.error().is_none());
    assert_eq!(
        api.calls(),
        vec![format!("resolve:{LINK}"), "song:xyz".to_string()]
    );
}

#[tokio::test]
async fn test_resolve_and_fetch_are_repeatable() {
    let api = FakeApi::default()
        .with_resolution(LINK, Ok(SongId::from("xyz")))
        .with_song("xyz", Ok(sample_song()));
    let workflow = SongWorkflow::new(api);

    let mut ids = Vec::new();
    for _ in 0..2 {
        let id = workflow.submit(LINK).await.unwrap();
        workflow.mount(id).await;
        ids.push(workflow.state().song().map(|s| s.id.clone()));
    }

    assert_eq!(ids[0], Some(SongId::from("xyz")));
    assert_eq!(ids[0], ids[1]);
}

#[tokio::test]
async fn test_rejected_link_fails_with_server_message() {
    let api = FakeApi::default().with_resolution(
        LINK,
        Err(ResolutionError::Rejected("unsupported url".to_string())),
    );
    let workflow = SongWorkflow::new(api);

    assert_eq!(workflow.submit(LINK).await, None);

    let state = workflow.state();
    assert_eq!(state.error(), Some("unsupported url"));
    assert!(state.song().is_none());
    assert!(!state.is_loading());
}

#[tokio::test]
async fn test_generic_resolution_failures() {
    let api = FakeApi::default()
        .with_resolution("a", Err(ResolutionError::Network("refused".into())))
        .with_resolution("b", Err(ResolutionError::Status(502)))
        .with_resolution("c", Err(ResolutionError::Malformed("eof".into())));
    let workflow = SongWorkflow::new(api);

    for link in ["a", "b", "c"] {
        assert_eq!(workflow.submit(link).await, None);
        assert_eq!(workflow.state().error(), Some("request failed"));
    }
}

#[tokio::test]
async fn test_fetch_not_found() {
    let api = FakeApi::default().with_song("gone", Err(FetchError::Status(404)));
    let workflow = SongWorkflow::new(api);

    workflow.mount(SongId::from("gone")).await;

    let state = workflow.state();
    assert_eq!(state.error(), Some("song not found"));
    assert!(state.song().is_none());
}

#[tokio::test]
async fn test_fetch_server_error_message() {
    let api = FakeApi::default().with_song("x", Err(FetchError::Status(503)));
    let workflow = SongWorkflow::new(api);

    workflow.mount(SongId::from("x")).await;
    assert_eq!(workflow.state().error(), Some("API error: 503"));
}

#[tokio::test]
async fn test_blank_submit_is_ignored() {
    let api = FakeApi::default();
    let workflow = SongWorkflow::new(api.clone());

    assert_eq!(workflow.submit("   ").await, None);
    assert_eq!(workflow.state(), WorkflowState::Idle);
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_submit_sends_link_as_given() {
    let padded = format!("  {LINK}\n");
    let api = FakeApi::default().with_resolution(&padded, Ok(SongId::from("xyz")));
    let workflow = SongWorkflow::new(api.clone());

    assert_eq!(workflow.submit(&padded).await, Some(SongId::from("xyz")));
    assert_eq!(api.calls(), vec![format!("resolve:{padded}")]);
    assert_eq!(
        workflow.state(),
        WorkflowState::Resolved {
            id: SongId::from("xyz")
        }
    );
}

#[tokio::test]
async fn test_new_attempt_clears_previous_error() {
    let api = FakeApi::default()
        .with_resolution("bad", Err(ResolutionError::Rejected("nope".into())))
        .with_resolution(LINK, Ok(SongId::from("xyz")));
    let workflow = SongWorkflow::new(api.clone());
    let mut states = workflow.subscribe();

    workflow.submit("bad").await;
    assert_eq!(workflow.state().error(), Some("nope"));
    states.mark_unchanged();

    let gate = api.gate(LINK);
    let pending = workflow.submit(LINK);
    tokio::pin!(pending);

    // drive the submit up to the network call
    tokio::select! {
        biased;
        _ = &mut pending => panic!("resolve should be held"),
        _ = states.changed() => {}
    }
    {
        let current = states.borrow_and_update();
        assert!(current.is_loading());
        assert!(current.error().is_none());
    }

    gate.send(()).unwrap();
    assert_eq!(pending.await, Some(SongId::from("xyz")));
}

#[tokio::test]
async fn test_stale_resolution_is_discarded() {
    let api = FakeApi::default()
        .with_resolution("slow", Ok(SongId::from("old")))
        .with_resolution("fast", Ok(SongId::from("new")));
    let gate = api.gate("slow");
    let workflow = SongWorkflow::new(api);

    let slow = workflow.submit("slow");
    let fast = async {
        tokio::task::yield_now().await;
        let id = workflow.submit("fast").await;
        gate.send(()).unwrap();
        id
    };

    let (slow_id, fast_id) = tokio::join!(slow, fast);

    // the first submission finished last but was superseded
    assert_eq!(slow_id, None);
    assert_eq!(fast_id, Some(SongId::from("new")));
    assert_eq!(
        workflow.state(),
        WorkflowState::Resolved {
            id: SongId::from("new")
        }
    );
}

#[tokio::test]
async fn test_stale_song_does_not_replace_newer_view() {
    let mut old_song = sample_song();
    old_song.id = SongId::from("old");
    old_song.title = "Old".to_string();
    let api = FakeApi::default()
        .with_song("old", Ok(old_song))
        .with_song("xyz", Ok(sample_song()));
    let gate = api.gate("old");
    let workflow = SongWorkflow::new(api);

    let old = workflow.mount(SongId::from("old"));
    let new = async {
        tokio::task::yield_now().await;
        workflow.mount(SongId::from("xyz")).await;
        gate.send(()).unwrap();
    };
    tokio::join!(old, new);

    assert_eq!(workflow.state().song().map(|s| s.title.as_str()), Some("Song"));
}

#[tokio::test]
async fn test_leave_discards_song() {
    let workflow = SongWorkflow::new(FakeApi::default().with_song("xyz", Ok(sample_song())));

    workflow.mount(SongId::from("xyz")).await;
    assert!(workflow.state().song().is_some());

    workflow.leave();
    assert_eq!(workflow.state(), WorkflowState::Idle);
}

#[tokio::test]
async fn test_subscribers_see_every_transition() {
    let api = FakeApi::default().with_song("xyz", Ok(sample_song()));
    let gate = api.gate("xyz");
    let workflow = SongWorkflow::new(api);
    let mut states = workflow.subscribe();

    let mount = workflow.mount(SongId::from("xyz"));
    tokio::pin!(mount);

    tokio::select! {
        biased;
        _ = &mut mount => panic!("fetch should be held"),
        _ = states.changed() => {}
    }
    assert_eq!(
        *states.borrow_and_update(),
        WorkflowState::LoadingSong {
            id: SongId::from("xyz")
        }
    );

    gate.send(()).unwrap();
    mount.await;
    assert!(states.has_changed().unwrap());
    assert_eq!(states.borrow_and_update().name(), "ready");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_submits_settle_on_a_result() {
    for _ in 0..50 {
        let api = FakeApi::default().with_resolution(LINK, Ok(SongId::from("xyz")));
        let workflow = Arc::new(SongWorkflow::new(api));

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let workflow = Arc::clone(&workflow);
                tokio::spawn(async move { workflow.submit(LINK).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        // the newest attempt always publishes last
        assert_eq!(
            workflow.state(),
            WorkflowState::Resolved {
                id: SongId::from("xyz")
            }
        );
    }
}
