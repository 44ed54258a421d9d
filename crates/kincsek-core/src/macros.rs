#[macro_export]
macro_rules! get_kincsek_setting {
    ($setting:ident) => {
        ::std::env::var(stringify!($setting))
            .unwrap_or(::kincsek_core::config::$setting.to_string())
    };
    ($setting:ident, usize) => {
        match ::std::env::var(stringify!($setting)) {
            Ok(v) => match v.parse::<usize>() {
                Ok(i) => i,
                Err(_e) => {
                    ::log::warn!(
                        "Env var setting {}, is not a valid unsigned integer. Using default",
                        stringify!($setting)
                    );
                    ::kincsek_core::config::$setting
                }
            },
            Err(_e) => ::kincsek_core::config::$setting,
        }
    };
}

macro_rules! internal_get_kincsek_setting {
    ($setting:ident) => {
        ::std::env::var(stringify!($setting)).unwrap_or(crate::config::$setting.to_string())
    };
    ($setting:ident, usize) => {
        match ::std::env::var(stringify!($setting)) {
            Ok(v) => match v.parse::<usize>() {
                Ok(i) => i,
                Err(_e) => {
                    ::log::warn!(
                        "Env var setting {}, is not a valid unsigned integer. Using default",
                        stringify!($setting)
                    );
                    crate::config::$setting
                }
            },
            Err(_e) => crate::config::$setting,
        }
    };
}
pub(crate) use internal_get_kincsek_setting;
