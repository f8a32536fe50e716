use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("reflect")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Share your emotions anonymously: throw a photo or compose a weekly mood collage")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("landing")
                .about("Show the landing screen")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("catalog")
                .about("List the images the collage picker offers")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("collage")
                .about("Compose a collage and save it anonymously")
                .arg(
                    Arg::new("slot")
                        .long("slot")
                        .short('s')
                        .value_name("SLOT=IMAGE")
                        .help("Fill slot 1-4. IMAGE is a catalog number (see `reflect catalog`) or an image URL")
                        .action(ArgAction::Append)
                )
                .arg(
                    Arg::new("note")
                        .long("note")
                        .short('n')
                        .help("How was your week?")
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("replay")
                .about("Dispatch JSON-lines commands against a collage and print the resulting events")
                .arg(
                    Arg::new("file")
                        .help("File with one JSON command per line, or - for stdin")
                        .required(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("throw")
                .about("Throw away an unwanted photo")
                .arg(
                    Arg::new("path")
                        .help("Image file to throw away")
                        .required(true)
                        .index(1)
                )
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "reflect");
    }

    #[test]
    fn test_cli_collage_command() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec![
            "reflect", "collage", "--slot", "1=3", "--slot", "4=https://example.com/a.png",
            "--note", "long week",
        ]);
        assert!(matches.is_ok());

        let matches = matches.unwrap();
        let collage_matches = matches.subcommand_matches("collage").unwrap();
        let slots: Vec<&String> = collage_matches.get_many::<String>("slot").unwrap().collect();
        assert_eq!(slots, vec!["1=3", "4=https://example.com/a.png"]);
        assert_eq!(
            collage_matches.get_one::<String>("note").unwrap(),
            "long week"
        );
    }

    #[test]
    fn test_cli_collage_without_slots() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["reflect", "collage"]);
        assert!(matches.is_ok());

        let matches = matches.unwrap();
        let collage_matches = matches.subcommand_matches("collage").unwrap();
        assert!(collage_matches.get_many::<String>("slot").is_none());
    }

    #[test]
    fn test_cli_catalog_json_flag() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["reflect", "catalog", "--json"]);
        assert!(matches.is_ok());

        let matches = matches.unwrap();
        let catalog_matches = matches.subcommand_matches("catalog").unwrap();
        assert!(catalog_matches.get_flag("json"));
    }

    #[test]
    fn test_cli_replay_requires_file() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["reflect", "replay"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_cli_throw_command() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["reflect", "throw", "old.png"]);
        assert!(matches.is_ok());

        let matches = matches.unwrap();
        let throw_matches = matches.subcommand_matches("throw").unwrap();
        assert_eq!(throw_matches.get_one::<String>("path").unwrap(), "old.png");
    }

    #[test]
    fn test_cli_verbose_flag_is_global() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["reflect", "catalog", "-v"]);
        assert!(matches.is_ok());
        assert!(matches.unwrap().get_flag("verbose"));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["reflect"]);
        assert!(matches.is_err());
    }
}
