//! Selector command implementation.
//!
//! Steps are `kind=value` pairs applied in order to the current fragment.
//! A combinator step (`>`, `+`, `~` or `descendant`) closes the current
//! fragment and starts the next one:
//!
//! ```text
//! kata selector element=div id=main + element=table id=data
//! div#main + table#data
//! ```

use clap::Args;
use serde::Serialize;

use crate::config::{Config, OutputFormat};
use crate::error::{KataError, Result};
use crate::output::{plural, Printer};
use crate::selector::{combine, Combinator, Part, Selector, SelectorFragment};

/// Build a CSS selector from kind=value steps
#[derive(Args, Debug)]
pub struct SelectorArgs {
    /// Steps such as element=a 'attr=href$=".png"' pseudo-class=focus
    #[arg(required = true, allow_hyphen_values = true)]
    pub steps: Vec<String>,

    /// Print the selector and its parts as JSON
    #[arg(long)]
    pub json: bool,
}

/// One parsed command line step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Part(Part, String),
    Combinator(Combinator),
}

impl Step {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw {
            "descendant" | " " => return Ok(Step::Combinator(Combinator::Descendant)),
            ">" | "+" | "~" => return Ok(Step::Combinator(Combinator::parse(raw)?)),
            _ => {}
        }

        let (kind, value) = raw.split_once('=').ok_or_else(|| KataError::Parse {
            message: format!("Invalid step: '{}'", raw),
            help: Some("Use kind=value (e.g. class=active) or a combinator: > + ~ descendant".to_string()),
        })?;

        Ok(Step::Part(kind.parse()?, value.to_string()))
    }
}

/// A built selector chain: fragments joined by combinators.
#[derive(Debug, Serialize)]
pub struct SelectorChain {
    pub selector: String,
    pub fragments: Vec<SelectorFragment>,
    pub combinators: Vec<Combinator>,
}

/// Apply steps in order, failing at the first step that breaks a rule.
pub fn build_chain(steps: &[Step]) -> Result<SelectorChain> {
    let mut fragments = Vec::new();
    let mut combinators = Vec::new();
    let mut current = SelectorFragment::new();

    for step in steps {
        match step {
            Step::Part(part, value) => current = current.apply(*part, value.as_str())?,
            Step::Combinator(combinator) => {
                if current.is_empty() {
                    return Err(missing_operand(*combinator, "left"));
                }
                fragments.push(std::mem::take(&mut current));
                combinators.push(*combinator);
            }
        }
    }

    if current.is_empty() {
        return match combinators.last() {
            Some(&combinator) => Err(missing_operand(combinator, "right")),
            None => Err(KataError::Parse {
                message: "No selector parts given".to_string(),
                help: None,
            }),
        };
    }
    fragments.push(current);

    let mut rendered: Box<dyn Selector> = Box::new(fragments[0].clone());
    for (combinator, next) in combinators.iter().zip(&fragments[1..]) {
        rendered = Box::new(combine(&*rendered, *combinator, next));
    }

    Ok(SelectorChain {
        selector: rendered.stringify(),
        fragments,
        combinators,
    })
}

fn missing_operand(combinator: Combinator, side: &str) -> KataError {
    KataError::Parse {
        message: format!("Combinator {:?} has no selector on its {}", combinator.as_str(), side),
        help: Some("Add a kind=value step on both sides of a combinator".to_string()),
    }
}

pub fn run(args: SelectorArgs, config: &Config, printer: &Printer) -> Result<()> {
    let steps = args
        .steps
        .iter()
        .map(|raw| Step::parse(raw))
        .collect::<Result<Vec<_>>>()?;

    let chain = build_chain(&steps)?;
    printer.status(
        "Built",
        &format!("selector from {}", plural(steps.len(), "step", "steps")),
    );

    if args.json || config.output.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&chain)?);
    } else {
        println!("{}", chain.selector);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn steps(raw: &[&str]) -> Vec<Step> {
        raw.iter().map(|s| Step::parse(s).unwrap()).collect()
    }

    #[test]
    fn test_parse_part_step_splits_on_first_equals() {
        assert_eq!(
            Step::parse(r#"attr=href$=".png""#).unwrap(),
            Step::Part(Part::Attribute, r#"href$=".png""#.to_string())
        );
    }

    #[test]
    fn test_parse_combinator_steps() {
        assert_eq!(Step::parse("+").unwrap(), Step::Combinator(Combinator::Adjacent));
        assert_eq!(Step::parse("descendant").unwrap(), Step::Combinator(Combinator::Descendant));
    }

    #[test]
    fn test_parse_invalid_steps() {
        assert!(Step::parse("element").is_err());
        assert!(Step::parse("tag=div").is_err());
    }

    #[test]
    fn test_build_single_fragment() {
        let chain = build_chain(&steps(&["element=a", r#"attr=href$=".png""#, "pseudo-class=focus"])).unwrap();
        assert_eq!(chain.selector, r#"a[href$=".png"]:focus"#);
        assert_eq!(chain.fragments.len(), 1);
        assert!(chain.combinators.is_empty());
    }

    #[test]
    fn test_build_combined_chain() {
        let chain = build_chain(&steps(&[
            "element=div",
            "id=main",
            "+",
            "element=table",
            "id=data",
            "~",
            "class=note",
        ]))
        .unwrap();
        assert_eq!(chain.selector, "div#main + table#data ~ .note");
        assert_eq!(chain.combinators, vec![Combinator::Adjacent, Combinator::Sibling]);
    }

    #[test]
    fn test_build_reports_rule_violations() {
        let err = build_chain(&steps(&["element=div", "element=span"])).unwrap_err();
        assert!(err.is_duplicate_singleton());

        let err = build_chain(&steps(&["class=a", "id=b"])).unwrap_err();
        assert!(err.is_out_of_order());
    }

    #[test]
    fn test_fragments_reset_after_combinator() {
        let chain = build_chain(&steps(&["class=a", ">", "id=b"])).unwrap();
        assert_eq!(chain.selector, ".a > #b");
    }

    #[test]
    fn test_dangling_combinators() {
        assert!(build_chain(&steps(&[">", "element=a"])).is_err());
        assert!(build_chain(&steps(&["element=a", "~"])).is_err());
        assert!(build_chain(&[]).is_err());
    }

    #[test]
    fn test_chain_json() {
        let chain = build_chain(&steps(&["element=ul", ">", "element=li", "pseudo-class=hover"])).unwrap();
        let json = serde_json::to_value(&chain).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "selector": "ul > li:hover",
                "fragments": [
                    { "element": "ul" },
                    { "element": "li", "pseudo_classes": ["hover"] }
                ],
                "combinators": ["child"]
            })
        );
    }
}
