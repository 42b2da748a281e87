// End-to-End scan and archive runs through a session

mod common;

use common::{Call, FakeGitHub, FakeRepo, ORG, days_ago, fixed_now};
use github_janitor::{Clock, Config, Session, TraversalSummary};
use pretty_assertions::assert_eq;

fn acme() -> FakeGitHub {
    FakeGitHub::new()
        .page(vec![
            FakeRepo::new("R1")
                .files(&["readme.md", "license"])
                .last_commit(days_ago(40)),
            FakeRepo::new("R2")
                .files(&["readme.md", "main.go"])
                .last_commit(days_ago(400)),
        ])
        .page(vec![
            FakeRepo::new("R3"),
            FakeRepo::new("acme.github.io").files(&["index.html"]),
        ])
}

fn session(fake: FakeGitHub) -> Session<FakeGitHub> {
    let mut config = Config::default();
    config.github.per_page = 2;
    Session::new(fake, ORG.to_string(), config).with_clock(Clock::Fixed(fixed_now()))
}

#[tokio::test]
async fn test_scan_prints_empty_repositories() {
    let session = session(acme());
    let mut out = Vec::new();

    let summary = session.scan(&mut out).await.unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "R1\nR3\n");
    assert_eq!(
        summary,
        TraversalSummary {
            pages: 2,
            visited: 4,
            matched: 2
        }
    );
    assert!(session.api().archived().is_empty());
    assert!(session.api().calls_for("acme.github.io").is_empty());
}

#[tokio::test]
async fn test_archive_archives_only_empty_repositories() {
    let session = session(acme());
    let mut out = Vec::new();

    session.archive(&mut out).await.unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Repository R1 has been archived.\nRepository R3 has been archived.\n"
    );
    assert_eq!(session.api().archived(), vec!["R1", "R3"]);
    assert!(
        !session
            .api()
            .calls_for("R2")
            .contains(&Call::Archive("R2".to_string()))
    );
    assert!(session.api().calls_for("acme.github.io").is_empty());
}

#[tokio::test]
async fn test_archive_reports_already_archived_repositories() {
    let fake = FakeGitHub::new().page(vec![
        FakeRepo::new("R1").archived(),
        FakeRepo::new("R2").files(&["LICENSE"]).last_commit(days_ago(2)),
    ]);
    let session = session(fake);
    let mut out = Vec::new();

    session.archive(&mut out).await.unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Repository R1 is already archived.\n"
    );
    assert!(session.api().archived().is_empty());
}

#[tokio::test]
async fn test_archive_failure_aborts_remaining_repositories() {
    let fake = FakeGitHub::new()
        .page(vec![FakeRepo::new("R1"), FakeRepo::new("R2")])
        .fail_archive("R1");
    let session = session(fake);
    let mut out = Vec::new();

    let err = session.archive(&mut out).await.unwrap_err();

    assert_eq!(err.repository(), Some("R1"));
    assert!(err.to_string().starts_with("error performing action for repo R1"));
    assert!(session.api().calls_for("R2").is_empty());
}
