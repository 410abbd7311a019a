use std::{
    process::ExitCode,
    sync::{Arc, atomic::AtomicBool},
    time::Duration,
};

use render::Renderer;
use util::ferror;

mod cli;
mod config;
mod debugging;
mod render;
mod resolver;
mod util;

fn watch_for_termination() -> (
    Arc<AtomicBool>,
    std::pin::Pin<Box<impl std::future::Future<Output = tokio::signal::unix::SignalKind>>>,
) {
    use std::sync::atomic::Ordering;
    use tokio::signal::unix::{SignalKind, signal};
    let flag = Arc::new(AtomicBool::new(false));
    let mut set = tokio::task::JoinSet::new();
    for kind in [
        SignalKind::quit(),
        SignalKind::hangup(),
        SignalKind::interrupt(),
        SignalKind::terminate(),
    ] {
        let mut sig = signal(kind).unwrap();
        let sent = flag.clone();
        set.spawn(async move {
            sig.recv().await;
            sent.store(true, Ordering::Relaxed);
            kind
        });
    }
    (
        flag,
        Box::pin(async move { set.join_next().await.unwrap().unwrap() }),
    )
}

#[tokio::main(worker_threads = 1)]
async fn main() -> ExitCode {
    let args = <cli::Cli as clap::Parser>::parse();
    let _debugging = debugging::DebuggingSession::new(&args);
    let config = config::Config::get(&args);
    let (term, pending_term) = watch_for_termination();

    macro_rules! get_config_or_error {
        () => {
            match config {
                Ok(config) => config,
                Err(error) => match error {
                    config::ConfigRetrievalError::NotFound(path) => {
                        ferror!("no configuration file @ {}", path.to_string_lossy())
                    }
                    other => ferror!("could not load config: {other}"),
                },
            }
        };
    }

    use cli::Command;
    match args.command {
        Command::Start => {
            let config = get_config_or_error!();
            let mut resolver = resolver::GroupStatusResolver::from_config(&config);
            let mut renderer = render::JsonLines::stdout();

            // If a fetch wedges the main loop, a signal should still get us out.
            tokio::spawn(async {
                pending_term.await;
                std::process::exit(1);
            });

            let mut interval = tokio::time::interval(Duration::from_secs(config.poll_interval_secs));
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            while !term.load(std::sync::atomic::Ordering::Relaxed) {
                if let Some(record) = resolver.resolve_once().await {
                    renderer.render(&record);
                }
                interval.tick().await;
            }
        }
        Command::Once => {
            let config = get_config_or_error!();
            let mut resolver = resolver::GroupStatusResolver::from_config(&config);
            let mut renderer = render::JsonLines::stdout();
            if let Some(record) = resolver.resolve_once().await {
                renderer.render(&record);
            }
        }
        Command::Configure { action } => {
            use cli::ConfigurationAction;
            match action {
                ConfigurationAction::Where { escape } => {
                    let path = match &config {
                        Ok(config) => &config.path,
                        Err(error) => error.path(),
                    };

                    let path_str = path.to_string_lossy();
                    let path_str = if !escape {
                        path_str
                    } else {
                        String::from(path_str).replace(' ', "\\ ").into()
                    };

                    println!("{path_str}");
                    eprintln!("This path is {}.", path.describe_for_choice_reasoning_suffix());
                }
            }
        }
    }

    ExitCode::SUCCESS
}
