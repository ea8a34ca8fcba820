use colour::red;

pub fn print_intro() {
    println!(
        r#"
   _________ ___  ___________ _      __
  / ___/ __ `/ / / / ___/ __ \ | /| / /
 / /  / /_/ / /_/ / /__/ /_/ / |/ |/ /
/_/   \__,_/\__, /\___/\____/|__/|__/
           /____/"#
    );

    if cfg!(debug_assertions) {
        red!("\nWARNING: YOU ARE RUNNING IN DEBUG MODE. Keep in mind that everything is way slower than it should be.\n\n");
    }
}
