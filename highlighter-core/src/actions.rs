/// User intents the front ends translate key presses into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    MoveWordForward,
    MoveWordBack,
    MoveToLineStart,
    MoveToLineEnd,
    MoveToTop,
    MoveToBottom,
    NextHighlight,
    PrevHighlight,
    /// Start selecting at the cursor
    EnterVisual,
    CancelVisual,
    /// Finish the selection and highlight it
    CommitSelection,
    DeleteHighlight,
    ToggleFocus,
    ShowHelp,
    Quit,
}

impl Action {
    /// Whether this action moves the cursor
    pub fn is_motion(&self) -> bool {
        matches!(
            self,
            Action::MoveUp
                | Action::MoveDown
                | Action::MoveLeft
                | Action::MoveRight
                | Action::MoveWordForward
                | Action::MoveWordBack
                | Action::MoveToLineStart
                | Action::MoveToLineEnd
                | Action::MoveToTop
                | Action::MoveToBottom
        )
    }
}
