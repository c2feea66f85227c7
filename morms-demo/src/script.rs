//! Scripted user session against the demo form.

/// One user interaction.
#[derive(Debug, Clone, Copy)]
pub enum Step {
    /// Replace the contents of a field.
    Type(&'static str, &'static str),
    /// Move focus out of a field.
    Leave(&'static str),
    /// Press the submit button.
    Submit,
}

/// A session that trips over every rule before submitting successfully.
pub const SESSION: &[Step] = &[
    Step::Type("username", "al"),
    Step::Leave("username"),
    Step::Type("password", "hunt"),
    Step::Leave("password"),
    Step::Type("ip", "192.168.0"),
    Step::Submit,
    Step::Type("password", "hunter2"),
    Step::Type("ip", "192.168.0.256"),
    Step::Leave("ip"),
    Step::Type("ip", "192.168.0.25"),
    Step::Submit,
];
