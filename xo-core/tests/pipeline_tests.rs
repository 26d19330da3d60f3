// xo-core/tests/pipeline_tests.rs
//! End-to-end tests of the split → resolve → compile → render pipeline,
//! using the behavior table the `xo` command line is expected to honor.

use anyhow::Result;
use xo_core::{
    compile, headless_format_string, render, resolve, split, ArgError, Matcher, RenderError,
    XoError,
};

const STARWARS: &str = "\
Vader: If only you knew the power of the Dark Side. Obi-Wan never told you what happened to your father.
Luke: He told me enough! He told me you killed him!
Vader: No, I am your father.
Luke: [shocked] No. No! That's not true! That's impossible!
";

#[test_log::test]
fn test_case_insensitive_capture() -> Result<()> {
    let lines = headless_format_string("/hello(.*)/Hi$1/i", "Hello there!\n")?;
    assert_eq!(lines, vec!["Hi there!"]);
    Ok(())
}

#[test_log::test]
fn test_lazy_quantifiers_between_groups() -> Result<()> {
    let lines = headless_format_string(r"/(hello).*?-.*?(\w+)/Why $1, $2!/i", "Hello! - Bob\n")?;
    assert_eq!(lines, vec!["Why Hello, Bob!"]);
    Ok(())
}

#[test_log::test]
fn test_missing_dollar_is_not_a_fallback() -> Result<()> {
    let lines = headless_format_string(
        r"/(\d)(\d)(\d)(\d)?(\d)?/$1, $2, $3, 4?:FOUR $5?:FIVE/",
        "123\n",
    )?;
    assert_eq!(lines, vec!["1, 2, 3, 4?:FOUR FIVE"]);
    Ok(())
}

#[test_log::test]
fn test_fallback_default_references_earlier_group() -> Result<()> {
    let lines = headless_format_string(r"/(\w)(\w)(\w)(\w)?/$1$2$3$4?:$1/", "abc\n")?;
    assert_eq!(lines, vec!["abca"]);
    Ok(())
}

#[test_log::test]
fn test_fallback_default_references_later_group() -> Result<()> {
    let lines = headless_format_string(r"/^(\d)?,(\d),(\d)/$3,$2,$1?:$3/", ",2,3\n")?;
    assert_eq!(lines, vec!["3,2,"]);
    Ok(())
}

#[test_log::test]
fn test_multiline_dialogue_in_order() -> Result<()> {
    let lines = headless_format_string(
        r#"/^(\w+):(\s*\[(.*?)\]\s*)?\s*([^\n]+)/$1 said, "$4" in a $3?:normal voice./mi"#,
        STARWARS,
    )?;
    assert_eq!(
        lines,
        vec![
            r#"Vader said, "If only you knew the power of the Dark Side. Obi-Wan never told you what happened to your father." in a normal voice."#,
            r#"Luke said, "He told me enough! He told me you killed him!" in a normal voice."#,
            r#"Vader said, "No, I am your father." in a normal voice."#,
            r#"Luke said, "No. No! That's not true! That's impossible!" in a shocked voice."#,
        ]
    );
    Ok(())
}

#[test_log::test]
fn test_stages_compose_manually() -> Result<()> {
    let spec = resolve(split("#(\\w+)\\#(\\d+)?#$1 is $2?:unset#m"))?;
    assert_eq!(spec.pattern, r"(\w+)#(\d+)?");
    assert_eq!(spec.template, "$1 is $2?:unset");
    assert_eq!(spec.flags, "m");

    let matcher = compile(&spec.pattern, &spec.flags)?;
    let matches = matcher.find_all("a#1\nb#\n");
    assert_eq!(matches.len(), 2);
    assert_eq!(render(&spec.template, &matches)?, vec!["a is 1", "b is unset"]);
    Ok(())
}

#[test_log::test]
fn test_error_taxonomy() {
    assert_eq!(
        headless_format_string("///", "1"),
        Err(XoError::Arg(ArgError::MissingPatternOrTemplate))
    );
    assert_eq!(
        headless_format_string("/a/b/i/extra", "a"),
        Err(XoError::Arg(ArgError::AmbiguousDelimiter { parts: 4 }))
    );
    assert_eq!(
        headless_format_string("/x/$0/", "abc"),
        Err(XoError::Render(RenderError::NoMatch))
    );
}
