use std::ffi::OsStr;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Page served to the probes: a large contentful heading, the consent
/// button the FID/INP probes click, and a delayed banner insertion that
/// produces a small layout shift.
const TEST_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>webvitals probe target</title></head>
<body>
  <h1>Checkout latency playground</h1>
  <p>A block of visible content large enough to register as a paint
  candidate, followed by the consent banner control the interaction
  probes target.</p>
  <button id="onetrust-accept-btn-handler" onclick="this.dataset.accepted='1'">Accept</button>
  <script>
    setTimeout(() => {
      const banner = document.createElement('div');
      banner.style.height = '24px';
      banner.textContent = 'late banner';
      document.body.insertBefore(banner, document.body.firstChild);
    }, 150);
  </script>
</body>
</html>"#;

pub struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawn a lightweight HTTP server that serves the probe target page.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_http_server() -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    thread::spawn(move || handle_client(stream));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(10));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
        },
    ))
}

fn handle_client(mut stream: TcpStream) {
    let mut buffer = [0u8; 2048];
    if stream.read(&mut buffer).is_err() {
        return;
    }
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        TEST_PAGE.len(),
        TEST_PAGE
    );
    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

/// Locate a Chrome/Chromium executable, or skip the test when none is
/// installed.
///
/// # Errors
///
/// Never fails currently; the `Result` keeps call sites uniform with the
/// other skip guards.
pub fn chrome_or_skip() -> Result<Option<String>, String> {
    if let Some(path) = find_chrome() {
        return Ok(Some(path));
    }
    eprintln!("skipping: no Chrome/Chromium executable found (set CHROME to override)");
    Ok(None)
}

fn find_chrome() -> Option<String> {
    if let Ok(path) = std::env::var("CHROME")
        && Path::new(&path).is_file()
    {
        return Some(path);
    }

    const CANDIDATES: [&str; 6] = [
        "google-chrome",
        "google-chrome-stable",
        "chromium",
        "chromium-browser",
        "chrome",
        "headless-shell",
    ];
    let path_var = std::env::var_os("PATH")?;
    for dir in std::env::split_paths(&path_var) {
        for candidate in CANDIDATES {
            let full: PathBuf = dir.join(candidate);
            if full.is_file() {
                return Some(full.to_string_lossy().into_owned());
            }
        }
    }
    None
}

/// Run the `webvitals` binary and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_webvitals<I, S>(args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = webvitals_bin()?;
    Command::new(bin)
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .map_err(|err| format!("run webvitals failed: {}", err))
}

fn webvitals_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_webvitals").map_or_else(
        || Err("CARGO_BIN_EXE_webvitals missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
