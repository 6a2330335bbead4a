mod catch_unwind;

pub(crate) use self::catch_unwind::CatchUnwind;
