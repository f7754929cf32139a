use std::sync::Arc;
use std::thread;

use rand::prelude::*;
use resnare::Snare;
use tracing_subscriber::{self, EnvFilter, filter::LevelFilter, fmt, prelude::*};

fn main() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::TRACE.into())
        .with_env_var("RUST_LOG")
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter)
        .init();

    // Keep stderr readable; the trace events tell the story.
    std::panic::set_hook(Box::new(|_| {}));

    let snare = Arc::new(Snare::new());

    let mut handles = vec![];
    for worker in 0..8 {
        let snare = snare.clone();
        handles.push(thread::spawn(move || {
            let mut rng = rand::rng();
            for i in 0..1000_u64 {
                if rng.random::<f64>() < 0.5 {
                    let _ = snare.call(move || -> u64 { panic!("worker {worker} call {i}") });
                } else {
                    let _ = snare.call(move || i);
                }
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
}
