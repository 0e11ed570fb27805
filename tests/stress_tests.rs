//! Stress tests for the shared threshold
//!
//! These tests verify:
//! - Threshold changes racing with emission never tear or lose records
//! - Records never interleave on a shared destination
//! - Print output survives any concurrent threshold change

use eslog::prelude::*;
use eslog::TIME_KEY;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

fn capture() -> (Logger, MemoryWriter) {
    let memory = MemoryWriter::new();
    let drop_time: ReplaceAttr = Arc::new(|_groups: &[String], attr: Attr| {
        (attr.key != TIME_KEY).then_some(attr)
    });
    let logger = Logger::builder()
        .writer(memory.clone())
        .replace_attr(drop_time)
        .build();
    (logger, memory)
}

/// ERROR is at or above every threshold the toggler sets, so no ERROR
/// record may go missing while the threshold flips underneath
#[test]
fn test_errors_survive_level_changes() {
    let (logger, memory) = capture();
    let stop = Arc::new(AtomicBool::new(false));

    let toggler = {
        let logger = logger.clone();
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            let names = ["debug", "info", "warn", "error"];
            let mut i = 0;
            while !stop.load(Ordering::Relaxed) {
                logger.set_level(names[i % names.len()]).unwrap();
                i += 1;
            }
        })
    };

    let writers: Vec<_> = (0..4)
        .map(|t| {
            let logger = logger.clone();
            thread::spawn(move || {
                for i in 0..250 {
                    logger.errorf(format_args!("critical-{}-{}", t, i)).unwrap();
                    logger.debugf(format_args!("noise-{}-{}", t, i)).unwrap();
                }
            })
        })
        .collect();

    for handle in writers {
        handle.join().unwrap();
    }
    stop.store(true, Ordering::Relaxed);
    toggler.join().unwrap();

    let out = memory.contents();
    let errors = out.lines().filter(|l| l.starts_with("level=ERROR ")).count();
    assert_eq!(errors, 1000);
    assert!(out
        .lines()
        .all(|l| l.starts_with("level=ERROR msg=critical-") || l.starts_with("level=DEBUG msg=noise-")));
}

/// Each emission observes either the old or the new threshold, never
/// anything in between
#[test]
fn test_threshold_reads_are_whole() {
    let (logger, _memory) = capture();
    let stop = Arc::new(AtomicBool::new(false));

    let setter = {
        let logger = logger.clone();
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            while !stop.load(Ordering::Relaxed) {
                logger.set_min_level(Level::DEBUG);
                logger.set_min_level(Level::FATAL);
            }
        })
    };

    for _ in 0..10_000 {
        let level = logger.level();
        assert!(level == Level::DEBUG || level == Level::FATAL);
    }

    stop.store(true, Ordering::Relaxed);
    setter.join().unwrap();
}

#[test]
fn test_print_under_threshold_churn() {
    let (logger, memory) = capture();
    let printed = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let logger = logger.clone();
            let printed = Arc::clone(&printed);
            thread::spawn(move || {
                for i in 0..200 {
                    if i % 10 == 0 {
                        logger.set_level(if t % 2 == 0 { "fatal" } else { "debug" }).unwrap();
                    }
                    logger.println(&[&"p", &t, &"-", &i]).unwrap();
                    printed.fetch_add(1, Ordering::Relaxed);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let out = memory.contents();
    assert_eq!(out.lines().count(), printed.load(Ordering::Relaxed));
    assert!(out.lines().all(|l| l.starts_with('p') && l.contains('-')));
}

#[test]
fn test_derived_loggers_share_threshold_under_load() {
    let (logger, memory) = capture();
    logger.set_min_level(Level::ERROR);

    let handles: Vec<_> = (0..8i32)
        .map(|t| {
            let scoped = logger.with_attrs(vec![field("worker", t)]);
            thread::spawn(move || {
                for i in 0..100 {
                    scoped.info(i).unwrap();
                    scoped.error(i).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let out = memory.contents();
    assert_eq!(out.lines().count(), 800);
    assert!(out.lines().all(|l| l.starts_with("level=ERROR ") && l.contains(" worker=")));
}
