use super::*;

fn config() -> arcus_core::AppConfig {
    arcus_core::AppConfig {
        env: arcus_core::Environment::Test,
        log_level: "info".to_string(),
        vocabulary_path: None,
        engagement: EngagementMode::Off,
        engagement_seed: 0,
        parser_trace: false,
    }
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["arcus-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert!(cli.seed.is_none());
}

#[test]
fn parses_parse_command_with_file() {
    let cli = Cli::try_parse_from(["arcus-cli", "parse", "--kind", "ads", "ads.md"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Parse {
            kind: KindArg::Ads,
            file: Some(ref f)
        }) if f == &PathBuf::from("ads.md")
    ));
}

#[test]
fn parse_without_file_reads_stdin() {
    let cli = Cli::try_parse_from(["arcus-cli", "parse", "--kind", "social"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Parse {
            kind: KindArg::Social,
            file: None
        })
    ));
}

#[test]
fn parse_requires_kind() {
    assert!(Cli::try_parse_from(["arcus-cli", "parse", "posts.md"]).is_err());
}

#[test]
fn unknown_kind_is_rejected() {
    assert!(Cli::try_parse_from(["arcus-cli", "parse", "--kind", "email"]).is_err());
}

#[test]
fn parses_campaign_command() {
    let cli = Cli::try_parse_from(["arcus-cli", "campaign", "response.json"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Campaign { file: Some(ref f) }) if f == &PathBuf::from("response.json")
    ));
}

#[test]
fn parses_vocabulary_command() {
    let cli = Cli::try_parse_from(["arcus-cli", "vocabulary"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Vocabulary)));
}

#[test]
fn seed_is_global() {
    let cli = Cli::try_parse_from(["arcus-cli", "campaign", "--seed", "42", "r.json"]).unwrap();
    assert_eq!(cli.seed, Some(42));

    let cli = Cli::try_parse_from(["arcus-cli", "--seed", "7", "vocabulary"]).unwrap();
    assert_eq!(cli.seed, Some(7));
}

#[test]
fn kind_arg_maps_to_document_kind() {
    assert_eq!(DocumentKind::from(KindArg::Social), DocumentKind::SocialPosts);
    assert_eq!(DocumentKind::from(KindArg::Ads), DocumentKind::AdCopy);
    assert_eq!(DocumentKind::from(KindArg::Brand), DocumentKind::BrandGuidelines);
}

#[test]
fn seed_turns_on_seeded_engagement() {
    let mut cfg = config();
    apply_seed(&mut cfg, Some(99));
    assert_eq!(cfg.engagement, EngagementMode::Seeded);
    assert_eq!(cfg.engagement_seed, 99);
}

#[test]
fn seed_keeps_random_mode() {
    let mut cfg = config();
    cfg.engagement = EngagementMode::Random;
    apply_seed(&mut cfg, Some(3));
    assert_eq!(cfg.engagement, EngagementMode::Random);
}

#[test]
fn no_seed_leaves_config_alone() {
    let mut cfg = config();
    apply_seed(&mut cfg, None);
    assert_eq!(cfg.engagement, EngagementMode::Off);
    assert_eq!(cfg.engagement_seed, 0);
}

#[test]
fn read_input_reports_missing_file() {
    let err = commands::read_input(Some(std::path::Path::new("/nonexistent/posts.md")))
        .unwrap_err();
    assert!(err.to_string().contains("/nonexistent/posts.md"));
}
