use bv_core::{Delivery, Game};

/// Score a whole sequence of deliveries given as scoresheet tokens.
pub fn run(tokens: &[String]) -> Result<(), String> {
    let mut game = Game::new();

    for token in tokens.iter().flat_map(|t| t.split_whitespace()) {
        if game.is_complete() {
            return Err(format!("extra roll '{token}' after the tenth frame"));
        }
        let delivery = Delivery::parse(token, &game).map_err(|e| e.to_string())?;
        game.bowl(delivery);
    }

    let score = game.score();
    println!("{}", super::render_board(game.frames(), &score));
    println!();
    if game.is_complete() {
        println!("  Final score: {}", score.total);
    } else {
        let cursor = game.cursor();
        println!(
            "  Score so far: {} (frame {}, ball {})",
            score.total,
            cursor.frame + 1,
            cursor.roll + 1
        );
    }

    Ok(())
}
