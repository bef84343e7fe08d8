use crate::ui::mvi::Reducer;
use crate::ui::profile::intent::ProfileFormIntent;
use crate::ui::profile::state::ProfileFormState;

pub struct ProfileFormReducer;

impl Reducer for ProfileFormReducer {
    type State = ProfileFormState;
    type Intent = ProfileFormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        let field = state.focused;
        match intent {
            ProfileFormIntent::Input(ch) => state.value_mut(field).push(ch),
            ProfileFormIntent::Backspace => {
                state.value_mut(field).pop();
            }
            ProfileFormIntent::FocusNext => state.focused = state.focused.next(),
            ProfileFormIntent::FocusPrev => state.focused = state.focused.prev(),
        }
        state
    }
}
