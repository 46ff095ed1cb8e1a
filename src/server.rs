//! Static file server scoped to the smoke run
//!
//! The accept loop runs on a background thread hosting its own actix
//! `System`, the same way the main server binary spawns its HTTP thread.
//! `StaticServer` is a guard: `stop()` shuts the server down gracefully and
//! joins the thread, and `Drop` does the same, so the listener is released
//! on every exit path including panics and early `?` returns.

use std::io;
use std::net::TcpStream;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, middleware};
use log::{debug, warn};

use crate::error::{AppError, AppResult};

const READY_POLL_INTERVAL: Duration = Duration::from_millis(20);

pub(crate) struct StaticServer {
    handle: ServerHandle,
    thread: Option<thread::JoinHandle<()>>,
}

impl StaticServer {
    /// Start serving `root` on `127.0.0.1:<port>` in a background thread.
    ///
    /// The bind result is reported back over a channel before the serve loop
    /// starts, so a taken port surfaces here as `AppError::Bind` instead of a
    /// later connection failure.
    pub(crate) fn spawn(root: PathBuf, port: u16, directory_listing: bool) -> AppResult<Self> {
        debug!("serving {} on http://127.0.0.1:{port}/", root.display());
        let (tx, rx) = mpsc::channel::<io::Result<ServerHandle>>();

        let thread = thread::Builder::new()
            .name(format!("static-server-{port}"))
            .spawn(move || {
                let sys = actix_web::rt::System::new();
                let bound = HttpServer::new(move || {
                    let mut files =
                        actix_files::Files::new("/", root.clone()).index_file("index.html");
                    if directory_listing {
                        files = files.show_files_listing();
                    }
                    App::new()
                        .wrap(middleware::NormalizePath::new(middleware::TrailingSlash::Trim))
                        .service(files)
                })
                .workers(1)
                .disable_signals()
                .bind(("127.0.0.1", port));

                match bound {
                    Ok(server) => {
                        let server = server.run();
                        // The caller owns the handle; this thread only drives the loop.
                        let _ = tx.send(Ok(server.handle()));
                        if let Err(e) = sys.block_on(server) {
                            warn!("server loop ended with error: {e}");
                        }
                    }
                    Err(e) => {
                        let _ = tx.send(Err(e));
                    }
                }
            })
            .map_err(AppError::Bind)?;

        match rx.recv() {
            Ok(Ok(handle)) => Ok(Self {
                handle,
                thread: Some(thread),
            }),
            Ok(Err(e)) => {
                let _ = thread.join();
                Err(AppError::Bind(e))
            }
            Err(_) => {
                let _ = thread.join();
                Err(AppError::Bind(io::Error::other(
                    "server thread exited before reporting its bind result",
                )))
            }
        }
    }

    /// Graceful shutdown: stop accepting connections, then join the thread.
    pub(crate) fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let Some(thread) = self.thread.take() else {
            return;
        };
        actix_web::rt::System::new().block_on(self.handle.stop(true));
        if thread.join().is_err() {
            warn!("server thread panicked during shutdown");
        }
    }
}

impl Drop for StaticServer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Poll `127.0.0.1:<port>` with TCP connects until the listener answers or
/// the deadline passes. Replaces the fixed startup sleep: bounded, and
/// returns as soon as the server is actually reachable.
pub(crate) fn wait_ready(port: u16, timeout: Duration) -> AppResult<()> {
    let deadline = Instant::now() + timeout;
    loop {
        match TcpStream::connect(("127.0.0.1", port)) {
            Ok(_) => return Ok(()),
            Err(e) if Instant::now() >= deadline => {
                return Err(AppError::Connection(format!(
                    "server on port {port} not accepting connections after {timeout:?}: {e}"
                )));
            }
            Err(_) => thread::sleep(READY_POLL_INTERVAL),
        }
    }
}
