mod todo_board;

pub use todo_board::TodoBoard;
