mod entry;

use cfspeed::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
