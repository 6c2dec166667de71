mod common;

use common::CountingSource;
use component_checklist::prelude::*;

const COMPONENT: &str = "function Foo() { return <div/>; }";
const PLAIN_FUNCTION: &str = "function foo() { return 1; }";
const ARROW_COMPONENT: &str = "const Foo = () => <div/>;";
const UNBALANCED: &str = "function Broken() { return <div/>;";

fn context() -> DetectionContext {
    DetectionContext {
        repo: RepoCoordinates::new("acme", "storefront"),
        head_ref: "feature/new-card".to_string(),
    }
}

fn added(name: &str) -> ChangedFile {
    ChangedFile::new(name, ChangeStatus::Added)
}

#[tokio::test]
async fn test_empty_change_list_is_no_match() -> Result<()> {
    let source = CountingSource::default();
    let verdict = detect(&[], &context(), &source).await?;
    assert_eq!(verdict, DetectionVerdict::no_match());
    assert_eq!(source.fetch_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_non_source_files_are_never_fetched() -> Result<()> {
    let source = CountingSource::default();
    let verdict = detect(&[added("a.py")], &context(), &source).await?;
    assert!(!verdict.matched);
    assert_eq!(source.fetch_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_only_added_sources_are_fetched_in_order() -> Result<()> {
    let files = vec![
        ChangedFile::new("src/Old.jsx", ChangeStatus::Modified),
        added("src/b.ts"),
        ChangedFile::new("src/Gone.tsx", ChangeStatus::Removed),
        added("docs/readme.md"),
        added("src/a.js"),
        added("src/Upper.JSX"),
    ];
    let source = CountingSource::new(&[("src/b.ts", PLAIN_FUNCTION), ("src/a.js", PLAIN_FUNCTION)]);

    let verdict = detect(&files, &context(), &source).await?;

    assert!(!verdict.matched);
    assert_eq!(source.requested(), vec!["src/b.ts", "src/a.js"]);
    Ok(())
}

#[tokio::test]
async fn test_first_component_stops_fetching() -> Result<()> {
    let files = vec![
        added("src/util.ts"),
        added("src/Card.tsx"),
        added("src/Later.tsx"),
        added("src/Last.jsx"),
    ];
    let source = CountingSource::new(&[
        ("src/util.ts", PLAIN_FUNCTION),
        ("src/Card.tsx", COMPONENT),
        ("src/Later.tsx", COMPONENT),
        ("src/Last.jsx", COMPONENT),
    ]);

    let verdict = detect(&files, &context(), &source).await?;

    assert_eq!(verdict, DetectionVerdict::matched_in("src/Card.tsx"));
    assert_eq!(source.fetch_count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_arrow_component_is_not_detected() -> Result<()> {
    let source = CountingSource::new(&[("src/Foo.jsx", ARROW_COMPONENT)]);
    let verdict = detect(&[added("src/Foo.jsx")], &context(), &source).await?;
    assert!(!verdict.matched);
    Ok(())
}

#[tokio::test]
async fn test_parse_failure_does_not_abort_scan() -> Result<()> {
    let files = vec![added("src/Broken.jsx"), added("src/Card.jsx")];
    let source = CountingSource::new(&[("src/Broken.jsx", UNBALANCED), ("src/Card.jsx", COMPONENT)]);

    let verdict = detect(&files, &context(), &source).await?;

    assert_eq!(verdict.component_file.as_deref(), Some("src/Card.jsx"));
    assert_eq!(source.fetch_count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_fetch_failure_does_not_abort_scan() -> Result<()> {
    // "src/Missing.tsx" has no entry and fails with a 404.
    let files = vec![added("src/Missing.tsx"), added("src/Card.tsx")];
    let source = CountingSource::new(&[("src/Card.tsx", COMPONENT)]);

    let verdict = detect(&files, &context(), &source).await?;

    assert!(verdict.matched);
    assert_eq!(source.requested(), vec!["src/Missing.tsx", "src/Card.tsx"]);
    Ok(())
}

#[tokio::test]
async fn test_all_failures_is_no_match() -> Result<()> {
    let files = vec![added("src/Missing.tsx"), added("src/Broken.jsx")];
    let source = CountingSource::new(&[("src/Broken.jsx", UNBALANCED)]);
    let verdict = detect(&files, &context(), &source).await?;
    assert!(!verdict.matched);
    Ok(())
}

#[tokio::test]
async fn test_detection_is_repeatable() -> Result<()> {
    let files = vec![added("src/util.ts"), added("src/Card.tsx")];
    let source = CountingSource::new(&[("src/util.ts", PLAIN_FUNCTION), ("src/Card.tsx", COMPONENT)]);

    let first = detect(&files, &context(), &source).await?;
    let second = detect(&files, &context(), &source).await?;

    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn test_adding_files_never_clears_a_match() -> Result<()> {
    let source = CountingSource::new(&[
        ("src/Card.tsx", COMPONENT),
        ("src/util.ts", PLAIN_FUNCTION),
        ("src/Arrow.jsx", ARROW_COMPONENT),
    ]);
    let base = vec![added("src/Card.tsx")];
    assert!(detect(&base, &context(), &source).await?.matched);

    let supersets = [
        vec![added("src/util.ts"), added("src/Card.tsx")],
        vec![added("src/Card.tsx"), added("src/Arrow.jsx")],
        vec![added("src/Arrow.jsx"), added("src/util.ts"), added("src/Card.tsx")],
    ];
    for files in &supersets {
        assert!(detect(files, &context(), &source).await?.matched);
    }
    Ok(())
}

#[tokio::test]
async fn test_requests_carry_head_ref() -> Result<()> {
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RefRecorder(Mutex<Vec<(String, String)>>);

    #[async_trait]
    impl ContentSource for RefRecorder {
        async fn fetch_content(
            &self,
            request: &ContentRequest<'_>,
        ) -> std::result::Result<String, FetchError> {
            self.0
                .lock()
                .unwrap()
                .push((request.repo.to_string(), request.git_ref.to_string()));
            Ok(PLAIN_FUNCTION.to_string())
        }
    }

    let recorder = RefRecorder::default();
    detect(&[added("src/a.ts")], &context(), &recorder).await?;
    assert_eq!(
        *recorder.0.lock().unwrap(),
        vec![("acme/storefront".to_string(), "feature/new-card".to_string())]
    );
    Ok(())
}
