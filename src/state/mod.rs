mod gesture;
mod session;

pub use gesture::{DragSession, GestureEnd, GestureState, ShapeGesture};
pub use session::EditorSession;
