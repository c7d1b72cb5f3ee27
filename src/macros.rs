//! This module contains the macros used in the project.

/// Read a secret from the config, or prompt for it and save the answer
macro_rules! config_password {
    ($config:ident, $setting_name:ident, $struct_name:ident, $key_name:ident, $string:expr) => {
        match $config
            .config_data
            .$setting_name
            .as_ref()
            .and_then(|c| c.$key_name.clone())
        {
            Some(value) => value,
            None => {
                let value = $crate::utils::get_password(concat!("Please enter ", $string, ": "))?;
                let cloned_value = value.clone();
                $config.update(|config_data| {
                    config_data
                        .$setting_name
                        .get_or_insert_with($struct_name::default)
                        .$key_name = Some(cloned_value);
                })?;
                value
            }
        }
    };
}

pub(crate) use config_password;
