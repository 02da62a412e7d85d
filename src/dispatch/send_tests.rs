//! Tests for the `send` command.

use std::io::{self, BufRead, Read};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::TempDir;

use super::{CommandError, SendOptions, resolve_message, resolve_webhook_url, run_send};
use crate::config::{ConfigRecord, SendArgs};
use crate::webhook::{HttpError, MessageSender, WebhookError};

const TEST_URL: &str = "https://discord.com/api/webhooks/test/token";

/// Sender that records every call and answers with a fixed outcome.
#[derive(Debug, Default)]
struct RecordingSender {
    sent: Mutex<Vec<(String, String)>>,
    fail_with_status: Option<u16>,
}

impl RecordingSender {
    fn failing(status: u16) -> Self {
        Self {
            sent: Mutex::default(),
            fail_with_status: Some(status),
        }
    }

    fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

impl MessageSender for RecordingSender {
    async fn send_message(&self, webhook_url: &str, content: &str) -> Result<(), WebhookError> {
        self.sent
            .lock()
            .unwrap()
            .push((webhook_url.to_string(), content.to_string()));
        match self.fail_with_status {
            Some(code) => Err(WebhookError::Api {
                status: http::StatusCode::from_u16(code).unwrap(),
            }),
            None => Ok(()),
        }
    }
}

/// Input stream that fails on first read.
struct BrokenInput;

impl Read for BrokenInput {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("stdin closed"))
    }
}

impl BufRead for BrokenInput {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Err(io::Error::other("stdin closed"))
    }

    fn consume(&mut self, _amt: usize) {}
}

fn write_config(dir: &TempDir, url: &str) -> PathBuf {
    let path = dir.path().join("config.json");
    ConfigRecord::with_webhook_url(url).save(&path).unwrap();
    path
}

fn options(config_path: Option<&Path>, message: Option<&str>, url: Option<&str>) -> SendOptions {
    SendOptions {
        config_path: config_path.map(Path::to_path_buf),
        message: message.map(ToString::to_string),
        url: url.map(ToString::to_string),
        dry_run: false,
    }
}

mod message_resolution {
    use super::*;

    #[test]
    fn explicit_message_is_used_verbatim() {
        let message = resolve_message(Some("  hi there  "), io::empty()).unwrap();
        assert_eq!(message, "  hi there  ");
    }

    #[test]
    fn explicit_message_takes_priority_over_input() {
        let message = resolve_message(Some("flag message"), &b"stdin message\n"[..]).unwrap();
        assert_eq!(message, "flag message");
    }

    #[test]
    fn input_lines_are_joined_with_newlines() {
        let message = resolve_message(None, &b"line1\nline2\n"[..]).unwrap();
        assert_eq!(message, "line1\nline2");
    }

    #[test]
    fn input_without_trailing_newline_is_kept() {
        let message = resolve_message(None, &b"only line"[..]).unwrap();
        assert_eq!(message, "only line");
    }

    #[test]
    fn crlf_line_endings_are_stripped() {
        let message = resolve_message(None, &b"a\r\nb\r\n"[..]).unwrap();
        assert_eq!(message, "a\nb");
    }

    #[test]
    fn empty_explicit_message_falls_back_to_input() {
        let message = resolve_message(Some(""), &b"from stdin\n"[..]).unwrap();
        assert_eq!(message, "from stdin");
    }

    #[test]
    fn empty_input_is_missing_message() {
        let err = resolve_message(None, io::empty()).unwrap_err();
        assert!(matches!(err, CommandError::MissingMessage), "got {err:?}");
    }

    #[test]
    fn single_blank_line_is_one_empty_line() {
        let message = resolve_message(None, &b"\n"[..]).unwrap();
        assert_eq!(message, "");
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let message = resolve_message(None, &b"caf\xe9 ready\nnext\n"[..]).unwrap();
        assert_eq!(message, "caf\u{FFFD} ready\nnext");
    }

    #[test]
    fn lone_carriage_return_inside_line_is_kept() {
        let message = resolve_message(None, &b"a\rb\r\n"[..]).unwrap();
        assert_eq!(message, "a\rb");
    }

    #[test]
    fn read_failure_is_stdin_error() {
        let err = resolve_message(None, BrokenInput).unwrap_err();
        assert!(matches!(err, CommandError::StdinRead(_)), "got {err:?}");
    }
}

mod url_resolution {
    use super::*;

    #[test]
    fn explicit_url_skips_configuration() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let url = resolve_webhook_url(Some(TEST_URL), Some(path.as_path())).unwrap();

        assert_eq!(url, TEST_URL);
    }

    #[test]
    fn configured_url_is_used_when_no_flag() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, TEST_URL);

        assert_eq!(resolve_webhook_url(None, Some(path.as_path())).unwrap(), TEST_URL);
        assert_eq!(resolve_webhook_url(Some(""), Some(path.as_path())).unwrap(), TEST_URL);
    }

    #[test]
    fn absent_config_is_missing_webhook_url() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");

        let err = resolve_webhook_url(None, Some(path.as_path())).unwrap_err();

        assert!(matches!(err, CommandError::MissingWebhookUrl), "got {err:?}");
    }

    #[test]
    fn empty_configured_url_is_missing_webhook_url() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "");

        let err = resolve_webhook_url(None, Some(path.as_path())).unwrap_err();

        assert!(matches!(err, CommandError::MissingWebhookUrl), "got {err:?}");
    }

    #[test]
    fn invalid_config_is_load_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{").unwrap();

        let err = resolve_webhook_url(None, Some(path.as_path())).unwrap_err();

        assert!(matches!(err, CommandError::ConfigLoad(_)), "got {err:?}");
    }
}

mod run {
    use super::*;

    #[tokio::test]
    async fn sends_message_and_confirms() {
        let sender = RecordingSender::default();
        let mut out = Vec::new();

        run_send(
            &options(None, Some("hi"), Some(TEST_URL)),
            &sender,
            io::empty(),
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(sender.sent(), [(TEST_URL.to_string(), "hi".to_string())]);
        assert_eq!(String::from_utf8(out).unwrap(), "Message sent successfully\n");
    }

    #[tokio::test]
    async fn dry_run_prints_message_and_url_without_sending() {
        let sender = RecordingSender::default();
        let mut out = Vec::new();
        let mut opts = options(None, Some("hi"), Some("https://example/webhook"));
        opts.dry_run = true;

        run_send(&opts, &sender, io::empty(), &mut out).await.unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(
            printed,
            "Dry run: would send message 'hi' to URL 'https://example/webhook'\n"
        );
        assert!(sender.sent().is_empty());
    }

    #[tokio::test]
    async fn dry_run_with_stdin_and_configured_url() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, TEST_URL);
        let sender = RecordingSender::default();
        let mut out = Vec::new();
        let mut opts = options(Some(path.as_path()), None, None);
        opts.dry_run = true;

        run_send(&opts, &sender, &b"test message from stdin\n"[..], &mut out)
            .await
            .unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("test message from stdin"));
        assert!(printed.contains(TEST_URL));
        assert!(sender.sent().is_empty());
    }

    #[tokio::test]
    async fn stdin_message_is_sent_joined() {
        let sender = RecordingSender::default();
        let mut out = Vec::new();

        run_send(
            &options(None, None, Some(TEST_URL)),
            &sender,
            &b"line1\nline2\n"[..],
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(sender.sent()[0].1, "line1\nline2");
    }

    #[tokio::test]
    async fn missing_message_fails_before_config_access() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "corrupt").unwrap();
        let sender = RecordingSender::default();
        let mut out = Vec::new();

        let opts = options(Some(path.as_path()), None, None);

        let err = run_send(&opts, &sender, io::empty(), &mut out)
            .await
            .unwrap_err();

        assert!(matches!(err, CommandError::MissingMessage), "got {err:?}");
        assert!(sender.sent().is_empty());
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn missing_webhook_url_sends_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");
        let sender = RecordingSender::default();
        let mut out = Vec::new();

        let opts = options(Some(path.as_path()), Some("hi"), None);

        let err = run_send(&opts, &sender, io::empty(), &mut out)
            .await
            .unwrap_err();

        assert!(matches!(err, CommandError::MissingWebhookUrl), "got {err:?}");
        assert!(sender.sent().is_empty());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn send_failure_is_wrapped() {
        let sender = RecordingSender::failing(404);
        let mut out = Vec::new();

        let err = run_send(
            &options(None, Some("hi"), Some(TEST_URL)),
            &sender,
            io::empty(),
            &mut out,
        )
        .await
        .unwrap_err();

        match &err {
            CommandError::Send(inner) => assert_eq!(inner.status_code(), Some(404)),
            other => panic!("Expected send failure, got {other:?}"),
        }
        assert!(err.is_send_failure());
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn send_failure_does_not_touch_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, TEST_URL);
        let before = std::fs::read_to_string(&path).unwrap();
        let sender = RecordingSender::failing(500);
        let mut out = Vec::new();

        let opts = options(Some(path.as_path()), Some("hi"), None);

        let result = run_send(&opts, &sender, io::empty(), &mut out).await;

        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[tokio::test]
    async fn empty_message_error_from_sender_is_propagated() {
        use crate::webhook::{DiscordWebhook, HttpClient, HttpRequest, HttpResponse};

        struct UnreachableClient;

        impl HttpClient for UnreachableClient {
            async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
                panic!("no request expected for an empty message");
            }
        }

        let webhook = DiscordWebhook::new(UnreachableClient);
        let mut out = Vec::new();

        let opts = options(None, None, Some(TEST_URL));

        let err = run_send(&opts, &webhook, &b"   \n"[..], &mut out)
            .await
            .unwrap_err();

        assert!(
            matches!(err, CommandError::Send(WebhookError::EmptyMessage)),
            "got {err:?}"
        );
    }
}

mod options_from_args {
    use super::*;

    #[test]
    fn copies_every_field() {
        let args = SendArgs {
            config: Some(PathBuf::from("c.json")),
            message: Some("m".to_string()),
            url: Some("u".to_string()),
            dry_run: true,
        };

        let opts = SendOptions::from(&args);

        assert_eq!(opts.config_path, Some(PathBuf::from("c.json")));
        assert_eq!(opts.message.as_deref(), Some("m"));
        assert_eq!(opts.url.as_deref(), Some("u"));
        assert!(opts.dry_run);
    }
}
