// src/prompt.rs
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use log::{debug, warn};
use regex::Regex;

use crate::cli::Cli;
use crate::config::{PackageManager, ResolvedConfig, Template};
use crate::error::BuildError;

const PROJECT_NAME_PATTERN: &str = "^[A-Za-z0-9_-]+$";
const PROJECT_NAME_HINT: &str =
  "Project name may only include letters, numbers, dashes and underscores.";
const DEFAULT_PROJECT_NAME: &str = "my-app";

/// Validates a candidate project name against the allowed character set.
/// The returned message is shown verbatim by the re-prompting input widget.
pub fn validate_project_name(input: &str) -> Result<(), String> {
  let pattern = Regex::new(PROJECT_NAME_PATTERN).expect("static pattern compiles");
  if !input.is_empty() && pattern.is_match(input) {
    Ok(())
  } else {
    Err(PROJECT_NAME_HINT.to_string())
  }
}

/// Pipeline fields a question can resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
  ProjectName,
  Template,
  PackageManager,
  ShouldInstall,
}

/// Closed set of prompt kinds. Each variant carries exactly the options its
/// widget needs, so the prompt plan stays typed end to end.
#[derive(Debug, PartialEq)]
pub enum QuestionKind {
  /// Free-form text input; the validator runs on every attempt and invalid
  /// input re-prompts instead of failing.
  Text {
    default: &'static str,
    validate: fn(&str) -> Result<(), String>,
  },
  /// Single choice from a fixed list of labels.
  Select { items: Vec<String>, default: usize },
  /// Yes/no confirmation.
  Confirm { default: bool },
}

#[derive(Debug, PartialEq)]
pub struct Question {
  pub field: Field,
  pub message: &'static str,
  pub kind: QuestionKind,
}

#[derive(Debug, PartialEq)]
pub enum Answer {
  Text(String),
  Selection(usize),
  Confirmed(bool),
}

impl Question {
  fn ask(&self, theme: &ColorfulTheme) -> Result<Answer, BuildError> {
    match &self.kind {
      QuestionKind::Text { default, validate } => {
        let validate = *validate;
        let value = Input::with_theme(theme)
          .with_prompt(self.message)
          .default((*default).to_string())
          .validate_with(move |input: &String| validate(input))
          .interact_text()?;
        Ok(Answer::Text(value))
      }
      QuestionKind::Select { items, default } => {
        let index = Select::with_theme(theme)
          .with_prompt(self.message)
          .items(items)
          .default(*default)
          .interact()?;
        Ok(Answer::Selection(index))
      }
      QuestionKind::Confirm { default } => {
        let value = Confirm::with_theme(theme)
          .with_prompt(self.message)
          .default(*default)
          .interact()?;
        Ok(Answer::Confirmed(value))
      }
    }
  }
}

/// CLI-supplied values after lenient parsing. Invalid values have already
/// been discarded (with a warning) and show up as `None`, routing the field
/// to its prompt.
#[derive(Debug, Default)]
pub struct PartialConfig {
  pub project_name: Option<String>,
  pub template: Option<Template>,
  pub package_manager: Option<PackageManager>,
  pub should_install: Option<bool>,
}

impl PartialConfig {
  pub fn from_cli(cli: &Cli) -> Self {
    let project_name = match &cli.project_name {
      Some(name) if validate_project_name(name).is_ok() => Some(name.clone()),
      Some(name) => {
        warn!("Ignoring invalid project name from command line: '{}'", name);
        None
      }
      None => None,
    };

    let template = cli.template.as_deref().and_then(|raw| {
      let parsed = Template::parse(raw);
      if parsed.is_none() {
        warn!("Unknown template '{}', will prompt instead.", raw);
      }
      parsed
    });

    let package_manager = cli.pm.as_deref().and_then(|raw| {
      let parsed = PackageManager::parse(raw);
      if parsed.is_none() {
        warn!("Unknown package manager '{}', will prompt instead.", raw);
      }
      parsed
    });

    PartialConfig {
      project_name,
      template,
      package_manager,
      should_install: cli.install_flag(),
    }
  }

  /// Questions still needed to complete this configuration, in the fixed
  /// prompt order: name, template, package manager, install confirmation.
  pub fn open_questions(&self) -> Vec<Question> {
    let mut questions = Vec::new();

    if self.project_name.is_none() {
      questions.push(Question {
        field: Field::ProjectName,
        message: "What is your project name?",
        kind: QuestionKind::Text {
          default: DEFAULT_PROJECT_NAME,
          validate: validate_project_name,
        },
      });
    }

    if self.template.is_none() {
      questions.push(Question {
        field: Field::Template,
        message: "Which template would you like to use?",
        kind: QuestionKind::Select {
          items: Template::ALL.iter().map(|t| t.label().to_string()).collect(),
          default: 0,
        },
      });
    }

    if self.package_manager.is_none() {
      questions.push(Question {
        field: Field::PackageManager,
        message: "Which package manager do you want to use?",
        kind: QuestionKind::Select {
          items: PackageManager::ALL.iter().map(|pm| pm.as_str().to_string()).collect(),
          default: 0,
        },
      });
    }

    if self.should_install.is_none() {
      questions.push(Question {
        field: Field::ShouldInstall,
        message: "Would you like to install dependencies now?",
        kind: QuestionKind::Confirm { default: true },
      });
    }

    questions
  }

  pub fn apply(&mut self, field: Field, answer: Answer) {
    match (field, answer) {
      (Field::ProjectName, Answer::Text(name)) => self.project_name = Some(name),
      (Field::Template, Answer::Selection(index)) => {
        self.template = Template::ALL.get(index).copied();
      }
      (Field::PackageManager, Answer::Selection(index)) => {
        self.package_manager = PackageManager::ALL.get(index).copied();
      }
      (Field::ShouldInstall, Answer::Confirmed(value)) => self.should_install = Some(value),
      (field, answer) => warn!("Mismatched answer {:?} for field {:?}", answer, field),
    }
  }

  pub fn into_resolved(self) -> Option<ResolvedConfig> {
    Some(ResolvedConfig {
      project_name: self.project_name?,
      template: self.template?,
      package_manager: self.package_manager?,
      should_install: self.should_install?,
    })
  }
}

/// Merges command-line values with interactively prompted answers into a
/// complete configuration. Prompts run sequentially, one per unresolved
/// field.
pub fn resolve_config(cli: &Cli) -> Result<ResolvedConfig, BuildError> {
  let mut partial = PartialConfig::from_cli(cli);
  debug!("CLI-resolved fields: {:?}", partial);

  let theme = ColorfulTheme::default();
  for question in partial.open_questions() {
    let answer = question.ask(&theme)?;
    partial.apply(question.field, answer);
  }

  // Every open question fills its field and select indices come from the
  // same fixed arrays the items were built from.
  Ok(partial.into_resolved().expect("all open questions were asked"))
}
