use super::*;

#[test]
fn parses_chart_with_filters() {
    let cli = Cli::try_parse_from([
        "autosent-cli",
        "chart",
        "--brands",
        "Nissan,Toyota",
        "--from",
        "2024-01-01",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Some(Commands::Chart { filters }) => {
            assert_eq!(filters.brands.as_deref(), Some("Nissan,Toyota"));
            assert_eq!(filters.from.as_deref(), Some("2024-01-01"));
            assert!(filters.models.is_none());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn file_flag_is_global() {
    let cli = Cli::try_parse_from(["autosent-cli", "breakdown", "--file", "data.json"])
        .expect("expected valid cli args");

    assert_eq!(cli.file, Some(PathBuf::from("data.json")));
    assert!(matches!(cli.command, Some(Commands::Breakdown { .. })));
}

#[test]
fn trend_window_is_optional() {
    let cli = Cli::try_parse_from(["autosent-cli", "trend"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Trend { window: None, .. })
    ));

    let cli = Cli::try_parse_from(["autosent-cli", "trend", "--window", "14"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Trend {
            window: Some(14),
            ..
        })
    ));
}

#[test]
fn feedback_defaults_to_first_page() {
    let cli = Cli::try_parse_from(["autosent-cli", "feedback", "Altima"])
        .expect("expected valid cli args");

    match cli.command {
        Some(Commands::Feedback {
            model,
            feature,
            polarity,
            page,
            per_page,
            ..
        }) => {
            assert_eq!(model, "Altima");
            assert!(feature.is_none() && polarity.is_none());
            assert_eq!(page, 1);
            assert_eq!(per_page, DEFAULT_PAGE_SIZE);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn feedback_focus_parses_polarity() {
    let cli = Cli::try_parse_from([
        "autosent-cli",
        "feedback",
        "Altima",
        "--feature",
        "Brake",
        "--polarity",
        "negative",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Feedback {
            polarity: Some(Polarity::Negative),
            ..
        })
    ));
}

#[test]
fn feedback_feature_requires_polarity() {
    let result = Cli::try_parse_from(["autosent-cli", "feedback", "Altima", "--feature", "Brake"]);
    assert!(result.is_err());
}

#[test]
fn feedback_rejects_unknown_polarity() {
    let result = Cli::try_parse_from([
        "autosent-cli",
        "feedback",
        "Altima",
        "--feature",
        "Brake",
        "--polarity",
        "sideways",
    ]);
    assert!(result.is_err());
}

#[test]
fn summary_splits_models() {
    let cli = Cli::try_parse_from([
        "autosent-cli",
        "summary",
        "--category",
        "Price",
        "--models",
        "Altima,Leaf",
        "--date",
        "01-02-2024",
        "--brand",
        "Nissan",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Some(Commands::Summary { models, .. }) => assert_eq!(models, vec!["Altima", "Leaf"]),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn details_accepts_day_first_date() {
    let cli = Cli::try_parse_from(["autosent-cli", "details", "Leaf", "4", "09-03-2024"])
        .expect("expected valid cli args");

    match cli.command {
        Some(Commands::Details { model, index, date }) => {
            assert_eq!(model, "Leaf");
            assert_eq!(index, 4);
            assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 9).expect("date"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn details_rejects_malformed_date() {
    let result = Cli::try_parse_from(["autosent-cli", "details", "Leaf", "4", "2024/03/09"]);
    assert!(result.is_err());
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["autosent-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn filter_args_reject_unknown_sentiment() {
    let args = FilterArgs {
        sentiments: Some("Ecstatic".into()),
        ..FilterArgs::default()
    };
    assert!(args.to_state().is_err());
}

#[test]
fn filter_args_build_selections() {
    let args = FilterArgs {
        brands: Some("Nissan".into()),
        sentiments: Some("very positive, Neutral".into()),
        ..FilterArgs::default()
    };
    let state = args.to_state().expect("filter state");
    assert!(!state.brands.is_unconstrained());
    assert!(!state.sentiments.is_unconstrained());
    assert!(state.models.is_unconstrained());
}
