// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![allow(missing_docs, reason = "test code")]

//! Tests for the parallel helpers.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use handy::par::{Error, par_for_each, par_map, par_try_map};
use tokio::sync::Barrier;

static_assertions::assert_impl_all!(Error: Send, Sync, std::error::Error);

const TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::test]
async fn results_follow_input_order() {
    let output = par_map(0..8_u64, |i| async move {
        // Later items finish first.
        tokio::time::sleep(Duration::from_millis(40 - i * 5)).await;
        i * 10
    })
    .await
    .unwrap();

    assert_eq!(output, [0, 10, 20, 30, 40, 50, 60, 70]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn items_run_concurrently() {
    let items = 16;
    let barrier = Arc::new(Barrier::new(items));

    // Every task waits until all of them have started; sequential execution would hang.
    let run = par_map(0..items, |_| {
        let barrier = Arc::clone(&barrier);
        async move { barrier.wait().await.is_leader() }
    });

    let leaders = tokio::time::timeout(TIMEOUT, run).await.unwrap().unwrap();
    assert_eq!(leaders.into_iter().filter(|&leader| leader).count(), 1);
}

#[tokio::test]
async fn lowest_index_failure_wins() {
    let error = par_try_map(0..5_u32, |i| async move {
        if i == 1 || i == 3 { Err(format!("item {i} rejected")) } else { Ok(i) }
    })
    .await
    .unwrap_err();

    assert_eq!(error.index(), 1);
    assert_eq!(error.failures(), 2);
    assert_eq!(error.total(), 5);
    assert!(error.to_string().contains("item 1 rejected"), "got: {error}");
}

#[tokio::test]
async fn every_item_runs_despite_failures() {
    let started = Arc::new(AtomicUsize::new(0));

    let result = par_for_each(0..20_u32, |i| {
        let started = Arc::clone(&started);
        async move {
            started.fetch_add(1, Ordering::SeqCst);
            if i == 0 { Err("first item fails") } else { Ok(()) }
        }
    })
    .await;

    assert_eq!(result.unwrap_err().index(), 0);
    assert_eq!(started.load(Ordering::SeqCst), 20);
}

#[tokio::test]
async fn panic_is_reported_as_failure() {
    let error = par_map(0..3_u32, |i| async move {
        assert!(i != 2, "item two panics");
        i
    })
    .await
    .unwrap_err();

    assert_eq!(error.index(), 2);
    assert_eq!(error.failures(), 1);
    assert!(error.to_string().contains("panicked"), "got: {error}");
}

#[tokio::test]
async fn for_each_success() {
    let sum = Arc::new(AtomicUsize::new(0));

    par_for_each(1..=10_usize, |i| {
        let sum = Arc::clone(&sum);
        async move {
            sum.fetch_add(i, Ordering::SeqCst);
            Ok::<_, std::io::Error>(())
        }
    })
    .await
    .unwrap();

    assert_eq!(sum.load(Ordering::SeqCst), 55);
}
