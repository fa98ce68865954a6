use error_flow::{fail_if, flow, ConditionError, FlowConfig, LogStrategy, ReturnStrategy};
use std::fmt;

#[derive(Debug, PartialEq)]
enum AppError {
    Condition(String),
    Io(&'static str),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Condition(msg) => write!(f, "condition: {msg}"),
            Self::Io(msg) => write!(f, "io: {msg}"),
        }
    }
}

impl From<ConditionError> for AppError {
    fn from(err: ConditionError) -> Self {
        Self::Condition(err.message().to_string())
    }
}

fn reserve(requested: u32, available: u32) -> Result<u32, AppError> {
    fail_if!(requested > available, "requested {requested} of {available}");
    Ok(available - requested)
}

#[test]
fn fail_if_returns_early_with_formatted_message() {
    assert_eq!(reserve(1, 3), Ok(2));
    assert_eq!(reserve(5, 3), Err(AppError::Condition("requested 5 of 3".to_string())));
}

#[test]
fn flow_macro_uses_ambient_config() {
    let result: Result<(), AppError> = flow!(|frame| {
        frame.defer(|| Err(AppError::Io("close")));
        Err(AppError::Io("write"))
    });

    assert_eq!(result, Err(AppError::Io("write")));
}

#[test]
fn flow_macro_accepts_a_config() {
    let config =
        FlowConfig::<AppError>::default().with(ReturnStrategy::Last).with(LogStrategy::Never);
    let result: Result<u8, AppError> = flow!(config, |frame| {
        frame.defer(|| Err(AppError::Io("close")));
        fail_if!(true, "guard");
        Ok(1)
    });

    assert_eq!(result, Err(AppError::Io("close")));
}
