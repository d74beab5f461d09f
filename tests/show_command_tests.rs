use predicates::prelude::*;

mod common;
use common::{assertions, fixtures::*};

#[cfg(test)]
mod show_command_tests {
    use super::*;

    #[test]
    fn test_show_starts_at_first_point() -> anyhow::Result<()> {
        let deck = setup_five_point_deck()?;

        deck.command()?
            .arg("show")
            .assert()
            .success()
            .stdout(assertions::shows_position(1, 5))
            .stdout(predicate::str::contains("〜たい"))
            .stdout(predicate::str::contains("[Basic]"))
            .stdout(predicate::str::contains("水を飲みたい。"))
            .stdout(predicate::str::contains("Show Details"));

        // The resolved position is written back right after load
        assert_eq!(deck.stored_position(), Some("0".to_string()));
        Ok(())
    }

    #[test]
    fn test_show_resumes_stored_position() -> anyhow::Result<()> {
        let deck = setup_five_point_deck()?;
        deck.store_position("3")?;

        deck.command()?
            .arg("show")
            .assert()
            .success()
            .stdout(assertions::shows_position(4, 5))
            .stdout(predicate::str::contains("〜のに"))
            .stdout(predicate::str::contains("(no examples)"));

        Ok(())
    }

    #[test]
    fn test_show_clamps_stale_position() -> anyhow::Result<()> {
        let deck = setup_five_point_deck()?;
        deck.store_position("12")?;

        deck.command()?
            .arg("show")
            .assert()
            .success()
            .stdout(assertions::shows_position(5, 5))
            .stdout(predicate::str::contains("[Unknown]"));

        assert_eq!(deck.stored_position(), Some("4".to_string()));
        Ok(())
    }

    #[test]
    fn test_show_resets_garbage_position() -> anyhow::Result<()> {
        let deck = setup_five_point_deck()?;
        deck.store_position("banana")?;

        deck.command()?
            .arg("show")
            .assert()
            .success()
            .stdout(assertions::shows_position(1, 5));

        assert_eq!(deck.stored_position(), Some("0".to_string()));
        Ok(())
    }

    #[test]
    fn test_show_missing_data_file() -> anyhow::Result<()> {
        let deck = setup_empty_workspace()?;

        deck.command()?
            .arg("show")
            .assert()
            .success()
            .stdout(assertions::load_failed());

        assert_eq!(deck.stored_position(), None);
        Ok(())
    }

    #[test]
    fn test_show_malformed_data_file() -> anyhow::Result<()> {
        let deck = setup_empty_workspace()?;
        std::fs::write(deck.data_path(), "{ \"grammar_points\": [")?;

        deck.command()?
            .arg("show")
            .assert()
            .success()
            .stdout(assertions::load_failed());

        Ok(())
    }

    #[test]
    fn test_show_empty_collection() -> anyhow::Result<()> {
        let deck = setup_empty_deck()?;

        deck.command()?
            .arg("show")
            .assert()
            .success()
            .stdout(assertions::empty_collection());

        Ok(())
    }

    #[test]
    fn test_show_creates_default_config() -> anyhow::Result<()> {
        let deck = setup_five_point_deck()?;

        deck.command()?.arg("show").assert().success();

        let config = std::fs::read_to_string(deck.config_path())?;
        assert!(config.contains("lastGrammarPoint"));
        Ok(())
    }

    #[test]
    fn test_malformed_config_is_an_error() -> anyhow::Result<()> {
        let deck = setup_five_point_deck()?;
        std::fs::write(deck.config_path(), "not json")?;

        deck.command()?
            .arg("show")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Error:"));

        Ok(())
    }

    #[test]
    fn test_negative_threshold_is_an_error() -> anyhow::Result<()> {
        let deck = setup_five_point_deck()?;

        deck.command()?
            .args(["--swipe-threshold=-1", "show"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error:"));

        Ok(())
    }
}
