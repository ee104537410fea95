/*!
Components turn input events into side effects.
*/

/// A piece of the user interface.
pub trait Component<Props, Event, Effect> {
    /// Create the component.
    fn new(props: Props) -> Self
    where
        Self: Sized;

    /// Handle an event and optionally emit a side effect for the application to carry out.
    fn handle(&mut self, event: Event) -> Option<Effect>;
}
