use anyhow::Result;

use pitch_accent_dictionary::pitch_accent::{
    error::PitchAccentError,
    tag::{resolve_tag, resolve_tags, tag_definitions},
};

#[test]
fn test_resolve_tag() -> Result<()> {
    let definition = resolve_tag("形動")?;
    assert_eq!(definition.abbreviation, "adj-na");
    assert_eq!(definition.description, "adjectival nouns or quasi-adjectives");

    assert_eq!(resolve_tag("副")?.abbreviation, "adv");
    assert_eq!(resolve_tag("感")?.description, "interjection");

    Ok(())
}

#[test]
fn test_resolve_tag_undefined() {
    for code in ["adv", "形", "名;", "", " 名"] {
        assert_eq!(
            resolve_tag(code),
            Err(PitchAccentError::UndefinedTag {
                code: code.to_owned()
            })
        );
    }
}

#[test]
fn test_resolve_tags_keeps_order() -> Result<()> {
    assert_eq!(resolve_tags("名")?, vec!["n"]);
    assert_eq!(resolve_tags("形動;名")?, vec!["adj-na", "n"]);
    assert_eq!(resolve_tags("名;形動;感")?, vec!["n", "adj-na", "int"]);

    Ok(())
}

#[test]
fn test_resolve_tags_empty_part() {
    for group in ["名;", ";名", "名;;代", ""] {
        assert_eq!(
            resolve_tags(group),
            Err(PitchAccentError::UndefinedTag {
                code: "".to_owned()
            }),
            "{:?}",
            group
        );
    }

    assert_eq!(
        resolve_tags("名;動"),
        Err(PitchAccentError::UndefinedTag {
            code: "動".to_owned()
        })
    );
}

#[test]
fn test_tag_definitions_order() {
    let codes: Vec<_> = tag_definitions().iter().map(|d| d.code).collect();
    assert_eq!(codes, vec!["副", "名", "代", "形動", "感"]);
}
