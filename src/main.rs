use log::info;

use tictactoe::{Board, Player};

fn main() {
    env_logger::init();

    let mut board = Board::new();
    let mut turn = Player::Nought;

    // scripted session: ◯ takes the main diagonal while ☓ chases the top row
    for coordinates in [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)] {
        let status = board
            .occupy(coordinates, turn)
            .expect("scripted moves target vacant cells");
        info!("{} played {:?}, game is {}", turn, coordinates, status);

        if status.is_terminal() {
            println!("{}", board);
            println!("result: {} for {}", status, turn);
            board.reset();
            break;
        }
        turn = turn.other();
    }
}
