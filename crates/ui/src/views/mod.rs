mod audio;
mod home;
mod play;

pub use home::HomeView;
pub use play::PlayView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
