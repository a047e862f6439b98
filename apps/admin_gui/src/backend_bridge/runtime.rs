//! Backend worker thread hosting the tokio runtime used for network calls.

use std::thread;

use admin_core::{HttpMemberSource, MemberSource, Settings};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(settings: Settings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let source = match HttpMemberSource::from_settings(&settings) {
                Ok(source) => source,
                Err(err) => {
                    let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                        UiErrorContext::LoadMembers,
                        format!("invalid members feed configuration: {err:#}"),
                    )));
                    tracing::error!("invalid members feed configuration: {err:#}");
                    return;
                }
            };

            let _ = ui_tx.try_send(UiEvent::Info(format!(
                "Loading members from {}",
                source.url()
            )));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::LoadMembers => {
                        let event = match source.fetch_members().await {
                            Ok(parsed) => UiEvent::MembersLoaded {
                                members: parsed.members,
                                rejected: parsed.rejected.len(),
                            },
                            Err(err) => UiEvent::Error(UiError::from_load_error(&err)),
                        };
                        deliver_load_result(&ui_tx, event);
                    }
                }
            }
            tracing::debug!("ui command queue closed; backend worker exiting");
        });
    });
}

/// Hands the load outcome to the UI, waiting for room in the queue.
///
/// This event ends the one-shot load, so it is never dropped for a full queue.
fn deliver_load_result(ui_tx: &Sender<UiEvent>, event: UiEvent) -> bool {
    match ui_tx.send(event) {
        Ok(()) => true,
        Err(_) => {
            tracing::warn!("ui event queue closed; dropping member load result");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossbeam_channel::bounded;

    use super::*;

    #[test]
    fn load_result_waits_for_a_full_queue() {
        let (ui_tx, ui_rx) = bounded::<UiEvent>(1);
        ui_tx
            .try_send(UiEvent::Info("Loading members".into()))
            .expect("prefill");

        let drain = thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            let first = ui_rx.recv().expect("info event");
            let second = ui_rx.recv().expect("load result");
            (first, second)
        });

        assert!(deliver_load_result(
            &ui_tx,
            UiEvent::MembersLoaded {
                members: Vec::new(),
                rejected: 2,
            }
        ));

        let (first, second) = drain.join().expect("drain thread");
        assert!(matches!(first, UiEvent::Info(_)));
        assert!(matches!(second, UiEvent::MembersLoaded { rejected: 2, .. }));
    }

    #[test]
    fn load_result_is_dropped_when_ui_is_gone() {
        let (ui_tx, ui_rx) = bounded::<UiEvent>(1);
        drop(ui_rx);
        assert!(!deliver_load_result(
            &ui_tx,
            UiEvent::Info("unused".into())
        ));
    }
}
