//! Helpers for driving components in a headless `VirtualDom`.

use std::time::Duration;

use dioxus::core::{NoOpMutations, VirtualDom};

use crate::content::Project;

pub(crate) fn demo_project() -> Project {
    Project {
        title: "Demo".to_string(),
        pictures: vec!["a.png".into(), "b.png".into(), "c.png".into()],
        description: "desc".to_string(),
        competences: vec!["X".into(), "Y".into()],
        github_link: None,
    }
}

/// Runs effects, tasks and re-renders until `duration` of (paused) time passes.
pub(crate) async fn pump(dom: &mut VirtualDom, duration: Duration) {
    let deadline = tokio::time::Instant::now() + duration;
    while tokio::time::timeout_at(deadline, dom.wait_for_work())
        .await
        .is_ok()
    {
        dom.render_immediate(&mut NoOpMutations);
    }
}
