pub(crate) mod site;
