pub mod delete;
pub mod get;
pub mod list;
pub mod set;

use std::collections::HashMap;

use time::OffsetDateTime;

/// Represents the breakpoint specification, status and results.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Breakpoint {
    /// Breakpoint identifier, unique in the scope of the debuggee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Action that the agent should perform when the code at the breakpoint location is hit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    /// Breakpoint source location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
    /// Condition that triggers the breakpoint. The condition is a compound boolean expression composed using
    /// expressions in a programming language at the source location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    /// List of read-only expressions to evaluate at the breakpoint location.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expressions: Vec<String>,
    /// Only relevant when action is `LOG`. Defines the message to log when the breakpoint hits.
    /// The message may include parameter placeholders `$0`, `$1`, etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_message_format: Option<String>,
    /// Indicates the severity of the log. Only relevant when action is `LOG`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
    /// When true, indicates that this is a final result and the breakpoint state will not change from here on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_final_state: Option<bool>,
    /// Time this breakpoint was created by the server in seconds resolution.
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub create_time: Option<OffsetDateTime>,
    /// Time this breakpoint was finalized as seen by the server in seconds resolution.
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub final_time: Option<OffsetDateTime>,
    /// The deadline for the breakpoint to stay in CANARY_ACTIVE state.
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub canary_expire_time: Option<OffsetDateTime>,
    /// E-mail address of the user that created this breakpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    /// Breakpoint status. The status includes an error flag and a human readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusMessage>,
    /// The stack at breakpoint time, where stack_frames[0] represents the most recently entered function.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stack_frames: Vec<StackFrame>,
    /// Values of evaluated expressions at breakpoint time.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub evaluated_expressions: Vec<Variable>,
    /// The `variable_table` exists to aid with computation, memory and network traffic optimization.
    /// It enables storing a variable once and reference it from multiple variables, including variables
    /// stored in the `variable_table` itself.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variable_table: Vec<Variable>,
    /// A set of custom breakpoint properties, populated by the agent, to be displayed to the user.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
    /// The current state of the breakpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<BreakpointState>,
}

impl Breakpoint {
    /// Resolves a variable that only carries a `var_table_index` against `variable_table`.
    pub fn resolve<'a>(&'a self, variable: &'a Variable) -> &'a Variable {
        match variable.var_table_index {
            Some(index) if index >= 0 => self.variable_table.get(index as usize).unwrap_or(variable),
            _ => variable,
        }
    }
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Capture stack frame and variables and update the breakpoint. The data is only captured once.
    /// After that the breakpoint is set in a final state.
    #[default]
    Capture,
    /// Log each breakpoint hit. The breakpoint remains active until deleted or expired.
    Log,
    /// A value not known to this version of the client.
    #[serde(other)]
    Unknown,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    #[default]
    Info,
    Warning,
    Error,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BreakpointState {
    #[default]
    StateUnspecified,
    /// Enabling canary but no agents are available.
    StateCanaryPendingAgents,
    /// Enabling canary and successfully assigning canary agents.
    StateCanaryActive,
    /// Breakpoint rolling out to all agents.
    StateRollingToAll,
    /// Breakpoint is hit/complete/failed.
    StateIsFinal,
    /// A value not known to this version of the client.
    #[serde(other)]
    Unknown,
}

/// Represents a location in the source code.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceLocation {
    /// Path to the source file within the source context of the target binary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Line inside the file. The first line in the file has the value `1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<i32>,
    /// Column within a line. The first column in a line as the value `1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<i32>,
}

/// Represents a contextual status message. The message can indicate an error or informational status,
/// and refer to specific parts of the containing object.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct StatusMessage {
    /// Distinguishes errors from informational messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
    /// Reference to which the message applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refers_to: Option<Reference>,
    /// Status message text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<FormatMessage>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reference {
    #[default]
    Unspecified,
    BreakpointSourceLocation,
    BreakpointCondition,
    BreakpointExpression,
    BreakpointAge,
    BreakpointCanaryFailed,
    VariableName,
    VariableValue,
    #[serde(other)]
    Unknown,
}

/// Represents a message with parameters.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatMessage {
    /// Format template for the message. The `format` uses placeholders `$0`, `$1`, etc. to reference parameters.
    /// `$$` can be used to denote the `$` character.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Optional parameters to be embedded into the message.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<String>,
}

impl FormatMessage {
    /// Substitutes `$0`, `$1`, ... with the parameters and `$$` with `$`.
    pub fn render(&self) -> String {
        let format = match &self.format {
            Some(format) => format.as_str(),
            None => return String::new(),
        };
        let mut result = String::with_capacity(format.len());
        let mut chars = format.chars().peekable();
        while let Some(c) = chars.next() {
            if c != '$' {
                result.push(c);
                continue;
            }
            if chars.peek() == Some(&'$') {
                chars.next();
                result.push('$');
                continue;
            }
            let mut digits = String::new();
            while let Some(&d) = chars.peek() {
                if !d.is_ascii_digit() {
                    break;
                }
                digits.push(d);
                chars.next();
            }
            match digits.parse::<usize>().ok().and_then(|i| self.parameters.get(i)) {
                Some(param) => result.push_str(param),
                None => {
                    result.push('$');
                    result.push_str(&digits);
                }
            }
        }
        result
    }
}

/// Represents a stack frame context.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct StackFrame {
    /// Demangled function name at the call site.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    /// Source location of the call site.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
    /// Set of arguments passed to this function. Note that this might not be populated for all stack frames.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<Variable>,
    /// Set of local variables at the stack frame location. Note that this might not be populated for all stack frames.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locals: Vec<Variable>,
}

/// Represents a variable or an argument possibly of a compound object type.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Variable {
    /// Name of the variable, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Simple value of the variable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Variable type (e.g. `MyClass`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// Members contained or pointed to by the variable.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Variable>,
    /// Reference to a variable in the shared variable table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub var_table_index: Option<i32>,
    /// Status associated with the variable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusMessage>,
}
