//! Authentication session collaborator.
//!
//! Session state lives outside this crate; the profile screen only asks it to
//! end the session.

pub trait AuthSession {
    /// Ends the current session. Navigation away from the profile screen is
    /// the implementor's concern.
    fn logout(&mut self);
}

impl<A: AuthSession + ?Sized> AuthSession for &mut A {
    fn logout(&mut self) {
        (**self).logout()
    }
}

impl<A: AuthSession + ?Sized> AuthSession for Box<A> {
    fn logout(&mut self) {
        (**self).logout()
    }
}
