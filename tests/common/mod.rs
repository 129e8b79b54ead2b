#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

/// Columns and rows shaped like the CancerModels search index.
pub fn search_index_rows(start: usize, count: usize) -> serde_json::Value {
    let rows: Vec<serde_json::Value> = (start..start + count)
        .map(|i| {
            serde_json::json!({
                "external_model_id": format!("CM{:05}", i),
                "project_name": if i % 2 == 0 { "PIVOT" } else { "EuroPDX" },
            })
        })
        .collect();
    serde_json::Value::Array(rows)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FtpBehavior {
    Accept,
    RejectLogin,
}

#[derive(Debug, Default)]
pub struct FtpSession {
    pub commands: Vec<String>,
    pub cwd: Option<String>,
    pub stored: Option<(String, Vec<u8>)>,
}

/// Single-connection FTP server speaking just enough of RFC 959 for one
/// passive-mode upload.
pub struct MockFtpServer {
    pub port: u16,
    handle: JoinHandle<FtpSession>,
}

impl MockFtpServer {
    pub fn start(behavior: FtpBehavior) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let handle = thread::spawn(move || serve(listener, behavior));
        Self { port, handle }
    }

    /// Waits for the client to disconnect and returns what it did.
    pub fn finish(self) -> FtpSession {
        self.handle.join().unwrap()
    }
}

fn reply(stream: &mut TcpStream, line: &str) {
    stream.write_all(format!("{}\r\n", line).as_bytes()).unwrap();
    stream.flush().unwrap();
}

fn serve(listener: TcpListener, behavior: FtpBehavior) -> FtpSession {
    let (mut control, _) = listener.accept().unwrap();
    let mut reader = BufReader::new(control.try_clone().unwrap());
    let mut session = FtpSession::default();
    let mut data_listener: Option<TcpListener> = None;

    reply(&mut control, "220 mock ftp ready");

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let line = line.trim_end().to_string();
        let (command, argument) = match line.split_once(' ') {
            Some((command, argument)) => (command.to_ascii_uppercase(), argument.to_string()),
            None => (line.to_ascii_uppercase(), String::new()),
        };
        session.commands.push(command.clone());

        match command.as_str() {
            "USER" if behavior == FtpBehavior::RejectLogin => {
                reply(&mut control, "530 Login incorrect.")
            }
            "USER" => reply(&mut control, "331 Please specify the password."),
            "PASS" => reply(&mut control, "230 Login successful."),
            "CWD" => {
                session.cwd = Some(argument);
                reply(&mut control, "250 Directory successfully changed.");
            }
            "TYPE" => reply(&mut control, "200 Switching to Binary mode."),
            "PASV" => {
                let listener = TcpListener::bind("127.0.0.1:0").unwrap();
                let port = listener.local_addr().unwrap().port();
                data_listener = Some(listener);
                reply(
                    &mut control,
                    &format!(
                        "227 Entering Passive Mode (127,0,0,1,{},{}).",
                        port / 256,
                        port % 256
                    ),
                );
            }
            "STOR" => {
                let Some(listener) = data_listener.take() else {
                    reply(&mut control, "425 Use PASV first.");
                    continue;
                };
                reply(&mut control, "150 Ok to send data.");
                let (mut data, _) = listener.accept().unwrap();
                let mut bytes = Vec::new();
                data.read_to_end(&mut bytes).unwrap();
                session.stored = Some((argument, bytes));
                reply(&mut control, "226 Transfer complete.");
            }
            "QUIT" => {
                reply(&mut control, "221 Goodbye.");
                break;
            }
            _ => reply(&mut control, "502 Command not implemented."),
        }
    }

    session
}
