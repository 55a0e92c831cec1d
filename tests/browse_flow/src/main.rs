fn main() {
    println!("Run `cargo test -p browse-flow` to execute end-to-end browse flow tests.");
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::fs;
    use std::future::Future;
    use std::path::PathBuf;
    use std::pin::Pin;
    use std::sync::Mutex;

    use kifshare_browser::{BrowserEvent, BrowserSession, BrowserState, Clipboard, ListingFetcher};
    use kifshare_github::{ContentsError, parse_listing};
    use kifshare_model::{EntryKind, Identity, RawEntry};

    /// Returns the path to the fixtures directory.
    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    /// Loads a fixture JSON file and returns it as a `serde_json::Value`.
    fn load_fixture(name: &str) -> serde_json::Value {
        let path = fixtures_dir().join(name);
        let data = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
        serde_json::from_str(&data)
            .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()))
    }

    /// Fetcher replaying scripted results, recording each requested path.
    struct ScriptedFetcher {
        results: Mutex<VecDeque<Result<Vec<RawEntry>, ContentsError>>>,
        requests: Mutex<Vec<String>>,
    }

    impl ScriptedFetcher {
        fn new(results: Vec<Result<Vec<RawEntry>, ContentsError>>) -> Self {
            Self {
                results: Mutex::new(results.into()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requested_paths(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl ListingFetcher for ScriptedFetcher {
        fn fetch_listing<'a>(
            &'a self,
            _identity: &'a Identity,
            path: &'a str,
        ) -> Pin<Box<dyn Future<Output = Result<Vec<RawEntry>, ContentsError>> + Send + 'a>>
        {
            self.requests.lock().unwrap().push(path.to_string());
            let result = self
                .results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()));
            Box::pin(async move { result })
        }
    }

    struct NoopClipboard;

    impl Clipboard for NoopClipboard {
        fn write(&mut self, _text: &str) -> bool {
            true
        }

        fn write_fallback(&mut self, _text: &str) -> bool {
            true
        }
    }

    fn root_listing() -> Vec<RawEntry> {
        parse_listing(load_fixture("contents_kif.json")).unwrap()
    }

    #[test]
    fn realistic_contents_payload_decodes() {
        let entries = root_listing();
        assert_eq!(entries.len(), 4);

        let sub = entries.iter().find(|e| e.name == "sub").unwrap();
        assert_eq!(sub.kind, EntryKind::Dir);
        assert_eq!(sub.path, "kif/sub");

        let kif = entries.iter().find(|e| e.name == "b.kif").unwrap();
        assert_eq!(kif.kind, EntryKind::File);
    }

    #[test]
    fn single_file_payload_is_not_a_directory() {
        let result = parse_listing(load_fixture("contents_file.json"));
        assert!(matches!(result, Err(ContentsError::NotADirectory)));
    }

    #[tokio::test]
    async fn submit_navigate_select_copy_flow() {
        let mut session = BrowserSession::new();
        let mut clipboard = NoopClipboard;
        let fetcher = ScriptedFetcher::new(vec![
            Ok(root_listing()),
            Ok(vec![RawEntry {
                name: "game1.kifu".into(),
                path: "kif/sub/game1.kifu".into(),
                kind: EntryKind::File,
            }]),
        ]);

        session
            .handle(
                BrowserEvent::SubmitIdentity {
                    user: "alice".into(),
                    repo: "games".into(),
                    branch: "".into(),
                },
                &fetcher,
                &mut clipboard,
            )
            .await;

        let model = session.render();
        assert_eq!(model.status, "ok");
        // Folders first, .keep dropped, only the KIF file selectable.
        let names: Vec<&str> = model.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["sub", "b.kif", "notes.txt"]);
        assert!(model.entries[1].selectable);
        assert!(!model.entries[2].selectable);

        session
            .handle(
                BrowserEvent::NavigateInto {
                    path: "kif/sub".into(),
                },
                &fetcher,
                &mut clipboard,
            )
            .await;

        session
            .handle(
                BrowserEvent::SelectFile {
                    path: "kif/sub/game1.kifu".into(),
                },
                &fetcher,
                &mut clipboard,
            )
            .await;

        let model = session.render();
        // Blank branch defaulted to main when the identity was submitted.
        assert_eq!(
            model.embed_url,
            "https://alice.github.io/games/viewer/index.html?o=alice&r=games&p=kif%2Fsub%2Fgame1.kifu&b=main"
        );
        // The session's URL is exactly the embed builder's output.
        let identity = Identity::from_input("alice", "games", "").unwrap();
        assert_eq!(
            model.embed_url,
            kifshare_embed::viewer_url(&identity, "kif/sub/game1.kifu")
        );
        assert_eq!(model.status, "embed url generated");

        session
            .handle(BrowserEvent::CopyCurrentUrl, &fetcher, &mut clipboard)
            .await;
        assert_eq!(session.render().status, "copied");

        assert_eq!(fetcher.requested_paths(), ["kif", "kif/sub"]);
    }

    #[tokio::test]
    async fn http_404_flow_preserves_embed_url() {
        let mut session = BrowserSession::new();
        let mut clipboard = NoopClipboard;
        let fetcher = ScriptedFetcher::new(vec![
            Ok(root_listing()),
            Err(ContentsError::Http {
                status: 404,
                body: r#"{"message":"Not Found"}"#.into(),
            }),
        ]);

        session
            .handle(
                BrowserEvent::SubmitIdentity {
                    user: "alice".into(),
                    repo: "games".into(),
                    branch: "main".into(),
                },
                &fetcher,
                &mut clipboard,
            )
            .await;
        session
            .handle(
                BrowserEvent::SelectFile {
                    path: "kif/b.kif".into(),
                },
                &fetcher,
                &mut clipboard,
            )
            .await;
        let embed_before = session.render().embed_url;

        session
            .handle(
                BrowserEvent::NavigateInto {
                    path: "kif/missing".into(),
                },
                &fetcher,
                &mut clipboard,
            )
            .await;

        assert_eq!(session.state(), BrowserState::Error);
        let model = session.render();
        assert!(model.status.starts_with("error: "));
        assert!(model.status.contains("404"));
        assert!(model.entries.is_empty());
        assert_eq!(model.embed_url, embed_before);
    }

    #[tokio::test]
    async fn invalid_submit_never_reaches_the_fetcher() {
        let mut session = BrowserSession::new();
        let fetcher = ScriptedFetcher::new(vec![]);

        session
            .handle(
                BrowserEvent::SubmitIdentity {
                    user: "  ".into(),
                    repo: "games".into(),
                    branch: "main".into(),
                },
                &fetcher,
                &mut NoopClipboard,
            )
            .await;

        assert_eq!(session.state(), BrowserState::Idle);
        assert_eq!(session.render().status, "missing required fields");
        assert!(fetcher.requested_paths().is_empty());
    }

    #[tokio::test]
    async fn rapid_navigation_keeps_latest_listing() {
        let mut session = BrowserSession::new();
        session.submit_identity("alice", "games", "main");

        // Two loads race: the older ticket's response arrives last.
        let slow = session.begin_load().unwrap();
        let fast = session.begin_load().unwrap();

        assert!(session.apply_listing(
            fast.seq,
            Ok(vec![RawEntry {
                name: "fresh.kif".into(),
                path: "kif/fresh.kif".into(),
                kind: EntryKind::File,
            }]),
        ));
        assert!(!session.apply_listing(slow.seq, Ok(root_listing())));

        let model = session.render();
        assert_eq!(model.entries.len(), 1);
        assert_eq!(model.entries[0].name, "fresh.kif");
    }
}
