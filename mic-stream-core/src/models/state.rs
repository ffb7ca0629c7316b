/// Capture session state machine.
///
/// State transitions:
/// ```text
/// idle → starting → running → stopping → idle
///                      ↓
///                     idle   (device loss, bypassing stopping)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Starting,
    Running,
    Stopping,
}

impl SessionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates() {
        assert!(SessionState::Idle.is_idle());
        assert!(SessionState::Running.is_running());
        assert!(!SessionState::Stopping.is_idle());
        assert!(!SessionState::Starting.is_running());
    }
}
