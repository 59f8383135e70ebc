// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Configuration settings that affect all crates in current system.

use ini::Ini;
use lazy_static::lazy_static;

lazy_static! {
    /// Global settings.
    pub static ref PARROT_CONF: Ini = Ini::load_from_str(include_str!("./config.toml")).unwrap();

    /// The cloud function name.
    pub static ref PARROT_FUNCTION_NAME: String = PARROT_CONF["function"]["name"].to_string();
    /// The environment variable that overrides the function root directory.
    pub static ref PARROT_ROOT_ENV: String = PARROT_CONF["function"]["environment"].to_string();
    /// The configuration file path, relative to the function root.
    pub static ref PARROT_CONFIG_PATH: String = PARROT_CONF["function"]["config_path"].to_string();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;

    #[tokio::test]
    async fn setting_shows() -> Result<()> {
        let conf = Ini::load_from_str(include_str!("./config.toml")).unwrap();

        for (sec, prop) in &conf {
            println!("Section: {:?}", sec);
            for (key, value) in prop.iter() {
                println!("{:?}:{:?}", key, value);
            }
        }

        assert_eq!("parrot", &conf["function"]["name"]);
        assert_eq!("PARROT_FUNCTION_ROOT", &conf["function"]["environment"]);
        assert_eq!("my_lambda/stuff/config.yml", &**PARROT_CONFIG_PATH);

        Ok(())
    }
}
